//! Application state and task wiring
//!
//! [`App`] owns every piece of mutable state plus the scheduler that drives
//! it. Two periodic tasks run against [`AppState`]:
//!
//! - keypad: poll the ladder, apply a confirmed action to the selection
//! - display: redraw the selected sensor
//!
//! The board firmware only has to call [`App::tick`] in its main loop.

use embedded_hal::delay::DelayNs;
use glance_hal::{CharDisplay, DisplayError, SensorIo};

use crate::config::{AppConfig, DebounceMode, MAX_TASKS};
use crate::keypad::{KeyBindings, KeyDecoder, KeypadError, KeypadPoller, Selection};
use crate::refresh::refresh;
use crate::scheduler::{PeriodicTask, Scheduler, SchedulerError};
use crate::sensors::SensorRegistry;

/// Application startup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    /// Invalid keypad threshold table
    Keypad(KeypadError),
    /// Display initialization failed
    Display(DisplayError),
    /// Registry holds no sensor to show
    NoSensors,
    /// Task table overflow
    Scheduler(SchedulerError),
}

impl From<KeypadError> for AppError {
    fn from(e: KeypadError) -> Self {
        Self::Keypad(e)
    }
}

impl From<DisplayError> for AppError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

impl From<SchedulerError> for AppError {
    fn from(e: SchedulerError) -> Self {
        Self::Scheduler(e)
    }
}

/// Everything the periodic tasks read and mutate
pub struct AppState<'a, IO, L, D> {
    /// Sensor and keypad inputs
    pub io: IO,
    /// Character display
    pub lcd: L,
    /// Blocking delay, used by the blocking debounce mode
    pub delay: D,
    registry: SensorRegistry<'a>,
    selection: Selection,
    keypad: KeypadPoller<'a>,
    debounce_mode: DebounceMode,
}

impl<'a, IO, L, D> AppState<'a, IO, L, D> {
    /// Registered sensors
    pub fn registry(&self) -> &SensorRegistry<'a> {
        &self.registry
    }

    /// Currently selected sensor
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Keypad poller
    pub fn keypad(&self) -> &KeypadPoller<'a> {
        &self.keypad
    }
}

/// Sensor display application
pub struct App<'a, IO, L, D> {
    state: AppState<'a, IO, L, D>,
    scheduler: Scheduler<AppState<'a, IO, L, D>, MAX_TASKS>,
}

impl<'a, IO, L, D> App<'a, IO, L, D>
where
    IO: SensorIo,
    L: CharDisplay,
    D: DelayNs,
{
    /// Build the application and initialize the display
    ///
    /// The keypad task is registered before the display task, so a press
    /// confirmed in a tick is visible to a refresh in the same tick.
    pub fn new(
        config: &AppConfig,
        registry: SensorRegistry<'a>,
        io: IO,
        mut lcd: L,
        delay: D,
    ) -> Result<Self, AppError> {
        if registry.is_empty() {
            return Err(AppError::NoSensors);
        }

        let decoder = KeyDecoder::new(config.key_thresholds)?;
        let keypad = KeypadPoller::new(
            config.keypad_pin,
            decoder,
            KeyBindings::default(),
            config.debounce_ms,
        );

        lcd.init()?;

        let mut scheduler = Scheduler::new();
        scheduler.add(PeriodicTask::new(
            "keypad",
            config.keypad_interval_ms,
            keypad_task::<IO, L, D>,
        ))?;
        scheduler.add(PeriodicTask::new(
            "display",
            config.display_interval_ms,
            display_task::<IO, L, D>,
        ))?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "app ready: {} sensors, {} tasks, debounce {} ms ({})",
            registry.count(),
            scheduler.len(),
            config.debounce_ms,
            config.debounce_mode
        );

        let selection = Selection::new(registry.count());
        Ok(Self {
            state: AppState {
                io,
                lcd,
                delay,
                registry,
                selection,
                keypad,
                debounce_mode: config.debounce_mode,
            },
            scheduler,
        })
    }

    /// Run every task due at `now_ms`, returning how many ran
    pub fn tick(&mut self, now_ms: u32) -> usize {
        self.scheduler.tick(&mut self.state, now_ms)
    }

    /// Application state
    pub fn state(&self) -> &AppState<'a, IO, L, D> {
        &self.state
    }

    /// Mutable application state
    pub fn state_mut(&mut self) -> &mut AppState<'a, IO, L, D> {
        &mut self.state
    }

    /// Index of the selected sensor
    pub fn selected(&self) -> usize {
        self.state.selection.index()
    }

    /// Registered tasks
    pub fn tasks(&self) -> &[PeriodicTask<AppState<'a, IO, L, D>>] {
        self.scheduler.tasks()
    }
}

fn keypad_task<IO, L, D>(state: &mut AppState<'_, IO, L, D>, now_ms: u32)
where
    IO: SensorIo,
    D: DelayNs,
{
    let action = match state.debounce_mode {
        DebounceMode::NonBlocking => state.keypad.poll(&mut state.io, now_ms),
        DebounceMode::Blocking => state.keypad.poll_blocking(&mut state.io, &mut state.delay),
    };

    if let Some(action) = action {
        let _index = state.selection.apply(action);
        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> sensor {}", action, _index);
    }
}

fn display_task<IO, L, D>(state: &mut AppState<'_, IO, L, D>, _now_ms: u32)
where
    IO: SensorIo,
    L: CharDisplay,
{
    let selected = state.selection.index();
    if let Err(_e) = refresh(&state.registry, selected, &mut state.io, &mut state.lcd) {
        #[cfg(feature = "defmt")]
        defmt::warn!("refresh of sensor {} failed: {}", selected, _e);
    }
}
