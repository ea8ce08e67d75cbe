//! Sensor inputs addressed by pin number
//!
//! The core reads sensors as `(pin, value)` pairs. This type owns the
//! blocking ADC, one channel per wired analog pin and the digital inputs,
//! and routes each read to the right peripheral.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Input;
use glance_hal::{AdcError, AnalogInput, DigitalInput, Level};
use heapless::Vec;

use crate::adc::{to_contract, AdcChannel};

/// Maximum digital inputs
pub const MAX_DIGITAL_INPUTS: usize = 8;

/// Errors while wiring inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiringError {
    /// Digital input table full
    Full,
    /// Pin already wired
    Duplicate,
}

/// RP2040 analog and digital inputs
pub struct Rp2040SensorIo<'d> {
    adc: Adc<'d, Blocking>,
    analog: [Option<Channel<'d>>; AdcChannel::COUNT],
    digital: Vec<(u8, Input<'d>), MAX_DIGITAL_INPUTS>,
}

impl<'d> Rp2040SensorIo<'d> {
    /// Create with no inputs wired
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            adc,
            analog: [None, None, None, None],
            digital: Vec::new(),
        }
    }

    /// Attach an ADC channel; replaces any channel already on that slot
    pub fn with_analog(mut self, channel: AdcChannel, input: Channel<'d>) -> Self {
        self.analog[channel.index()] = Some(input);
        self
    }

    /// Attach a digital input under its GPIO number
    pub fn add_digital(&mut self, gpio: u8, input: Input<'d>) -> Result<(), WiringError> {
        if self.digital.iter().any(|(pin, _)| *pin == gpio) {
            return Err(WiringError::Duplicate);
        }
        self.digital
            .push((gpio, input))
            .map_err(|_| WiringError::Full)
    }
}

impl AnalogInput for Rp2040SensorIo<'_> {
    fn read_analog(&mut self, pin: u8) -> Result<u16, AdcError> {
        let channel = AdcChannel::from_analog_pin(pin).ok_or(AdcError::InvalidPin)?;
        let input = self.analog[channel.index()]
            .as_mut()
            .ok_or(AdcError::InvalidPin)?;
        let raw = self
            .adc
            .blocking_read(input)
            .map_err(|_| AdcError::ConversionFailed)?;
        Ok(to_contract(raw))
    }
}

impl DigitalInput for Rp2040SensorIo<'_> {
    fn read_digital(&mut self, pin: u8) -> Level {
        match self.digital.iter().find(|(gpio, _)| *gpio == pin) {
            Some((_, input)) => Level::from(input.is_high()),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("digital read of unwired GPIO{}", pin);
                Level::Low
            }
        }
    }
}
