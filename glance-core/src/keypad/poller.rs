//! Debounced keypad polling
//!
//! A press only counts when two samples taken at least the debounce
//! window apart decode to the same key. Two ways to wait out the window:
//!
//! - [`KeypadPoller::poll`] records the first sample with a timestamp and
//!   re-samples on a later call once the window has passed. Nothing
//!   blocks, so other periodic tasks keep running.
//! - [`KeypadPoller::poll_blocking`] sleeps for the window between the two
//!   samples. The whole cooperative loop stalls for that time.

use embedded_hal::delay::DelayNs;
use glance_hal::AnalogInput;

use super::bindings::{KeyAction, KeyBindings};
use super::decoder::{KeyDecoder, KeyId};

/// Poller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollerState {
    /// No press pending
    Idle,
    /// First sample decoded to `key` at `since_ms`; waiting to re-check
    Confirming {
        /// Key seen by the first sample
        key: KeyId,
        /// Timestamp of the first sample
        since_ms: u32,
    },
}

/// Debouncing keypad poller
#[derive(Debug, Clone)]
pub struct KeypadPoller<'a> {
    /// Analog pin of the resistor ladder
    pin: u8,
    decoder: KeyDecoder<'a>,
    bindings: KeyBindings,
    /// Minimum time between the two samples (ms)
    debounce_ms: u32,
    state: PollerState,
}

impl<'a> KeypadPoller<'a> {
    /// Create a new poller
    pub fn new(pin: u8, decoder: KeyDecoder<'a>, bindings: KeyBindings, debounce_ms: u32) -> Self {
        Self {
            pin,
            decoder,
            bindings,
            debounce_ms,
            state: PollerState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Debounce window (ms)
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Non-blocking poll
    ///
    /// Returns the action of a press confirmed by this call, if any.
    pub fn poll<A: AnalogInput + ?Sized>(&mut self, adc: &mut A, now_ms: u32) -> Option<KeyAction> {
        match self.state {
            PollerState::Idle => {
                if let Some(key) = self.sample(adc) {
                    self.state = PollerState::Confirming {
                        key,
                        since_ms: now_ms,
                    };
                }
                None
            }
            PollerState::Confirming { key, since_ms } => {
                if now_ms.wrapping_sub(since_ms) < self.debounce_ms {
                    return None;
                }
                self.state = PollerState::Idle;
                let second = self.sample(adc);
                self.confirm(key, second)
            }
        }
    }

    /// Blocking poll
    ///
    /// On a press, sleeps for the debounce window before re-sampling.
    pub fn poll_blocking<A, D>(&mut self, adc: &mut A, delay: &mut D) -> Option<KeyAction>
    where
        A: AnalogInput + ?Sized,
        D: DelayNs + ?Sized,
    {
        let first = self.sample(adc)?;
        delay.delay_ms(self.debounce_ms);
        let second = self.sample(adc);
        self.state = PollerState::Idle;
        self.confirm(first, second)
    }

    /// Read and decode one sample; a failed read counts as released
    fn sample<A: AnalogInput + ?Sized>(&self, adc: &mut A) -> Option<KeyId> {
        match adc.read_analog(self.pin) {
            Ok(raw) => self.decoder.decode(raw),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("keypad read failed on pin {}: {}", self.pin, _e);
                None
            }
        }
    }

    fn confirm(&self, first: KeyId, second: Option<KeyId>) -> Option<KeyAction> {
        match second {
            Some(key) if key == first => {
                let action = self.bindings.action_for(key);
                #[cfg(feature = "defmt")]
                defmt::debug!("key {} confirmed, action {}", key, action);
                action
            }
            _ => {
                #[cfg(feature = "defmt")]
                defmt::trace!("key {} rejected on confirmation", first);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_THRESHOLDS;
    use glance_hal::AdcError;
    use std::collections::VecDeque;

    const UP_SAMPLE: u16 = 144;
    const DOWN_SAMPLE: u16 = 329;
    const SELECT_SAMPLE: u16 = 741;
    const RELEASED: u16 = 1023;

    /// ADC that replays queued samples, then reads released
    struct ScriptedAdc {
        samples: VecDeque<Result<u16, AdcError>>,
        reads: usize,
    }

    impl ScriptedAdc {
        fn new(samples: &[u16]) -> Self {
            Self {
                samples: samples.iter().map(|&s| Ok(s)).collect(),
                reads: 0,
            }
        }
    }

    impl AnalogInput for ScriptedAdc {
        fn read_analog(&mut self, pin: u8) -> Result<u16, AdcError> {
            assert_eq!(pin, 0);
            self.reads += 1;
            self.samples.pop_front().unwrap_or(Ok(RELEASED))
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        total_ns: u64,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn poller() -> KeypadPoller<'static> {
        let decoder = KeyDecoder::new(&KEY_THRESHOLDS).unwrap();
        KeypadPoller::new(0, decoder, KeyBindings::default(), 50)
    }

    #[test]
    fn test_idle_when_released() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[RELEASED]);
        assert_eq!(poller.poll(&mut adc, 0), None);
        assert_eq!(poller.state(), PollerState::Idle);
    }

    #[test]
    fn test_confirmed_press_after_window() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[UP_SAMPLE, UP_SAMPLE]);

        assert_eq!(poller.poll(&mut adc, 1000), None);
        assert!(matches!(poller.state(), PollerState::Confirming { .. }));

        // Inside the window: no re-sample
        assert_eq!(poller.poll(&mut adc, 1049), None);
        assert_eq!(adc.reads, 1);

        assert_eq!(poller.poll(&mut adc, 1050), Some(KeyAction::Up));
        assert_eq!(poller.state(), PollerState::Idle);
        assert_eq!(adc.reads, 2);
    }

    #[test]
    fn test_bounce_to_released_rejected() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[DOWN_SAMPLE, RELEASED]);

        assert_eq!(poller.poll(&mut adc, 0), None);
        assert_eq!(poller.poll(&mut adc, 100), None);
        assert_eq!(poller.state(), PollerState::Idle);
    }

    #[test]
    fn test_different_key_rejected() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[UP_SAMPLE, DOWN_SAMPLE]);

        assert_eq!(poller.poll(&mut adc, 0), None);
        assert_eq!(poller.poll(&mut adc, 100), None);
        assert_eq!(poller.state(), PollerState::Idle);
    }

    #[test]
    fn test_unbound_key_is_noop() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[SELECT_SAMPLE, SELECT_SAMPLE]);

        assert_eq!(poller.poll(&mut adc, 0), None);
        assert_eq!(poller.poll(&mut adc, 100), None);
        assert_eq!(poller.state(), PollerState::Idle);
    }

    #[test]
    fn test_window_across_clock_wrap() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[DOWN_SAMPLE, DOWN_SAMPLE]);

        assert_eq!(poller.poll(&mut adc, u32::MAX - 10), None);
        assert_eq!(poller.poll(&mut adc, 39), Some(KeyAction::Down));
    }

    #[test]
    fn test_read_error_counts_as_released() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[UP_SAMPLE]);
        adc.samples.push_back(Err(AdcError::ConversionFailed));

        assert_eq!(poller.poll(&mut adc, 0), None);
        assert_eq!(poller.poll(&mut adc, 100), None);
    }

    #[test]
    fn test_blocking_confirms_and_waits() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[UP_SAMPLE, UP_SAMPLE]);
        let mut delay = RecordingDelay::default();

        assert_eq!(poller.poll_blocking(&mut adc, &mut delay), Some(KeyAction::Up));
        assert_eq!(delay.total_ns, 50_000_000);
        assert_eq!(poller.state(), PollerState::Idle);
    }

    #[test]
    fn test_blocking_released_does_not_wait() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[RELEASED]);
        let mut delay = RecordingDelay::default();

        assert_eq!(poller.poll_blocking(&mut adc, &mut delay), None);
        assert_eq!(delay.total_ns, 0);
        assert_eq!(adc.reads, 1);
    }

    #[test]
    fn test_blocking_bounce_rejected() {
        let mut poller = poller();
        let mut adc = ScriptedAdc::new(&[DOWN_SAMPLE, RELEASED]);
        let mut delay = RecordingDelay::default();

        assert_eq!(poller.poll_blocking(&mut adc, &mut delay), None);
        assert_eq!(adc.reads, 2);
    }
}
