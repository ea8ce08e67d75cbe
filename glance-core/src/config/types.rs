//! Configuration type definitions

use super::hardware::{KEYPAD_PIN, KEY_THRESHOLDS};

/// Maximum sensors in the registry
pub const MAX_SENSORS: usize = 8;

/// Maximum periodic tasks in the scheduler
pub const MAX_TASKS: usize = 4;

/// Keypad debounce window in milliseconds
pub const DEBOUNCE_MS: u32 = 50;

/// Keypad poll interval in milliseconds
pub const KEYPAD_INTERVAL_MS: u32 = 100;

/// Display refresh interval in milliseconds
pub const DISPLAY_INTERVAL_MS: u32 = 500;

/// How the keypad confirms a press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceMode {
    /// Record the first sample and re-check on a later poll
    #[default]
    NonBlocking,
    /// Busy-wait for the debounce window inside the poll; every other
    /// task is stalled for its duration
    Blocking,
}

/// Application tunables
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Analog pin of the keypad ladder
    pub keypad_pin: u8,
    /// Keypad band boundaries, strictly ascending
    pub key_thresholds: &'static [u16],
    /// Debounce window (ms)
    pub debounce_ms: u32,
    /// Debounce strategy
    pub debounce_mode: DebounceMode,
    /// Keypad poll interval (ms)
    pub keypad_interval_ms: u32,
    /// Display refresh interval (ms)
    pub display_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keypad_pin: KEYPAD_PIN,
            key_thresholds: &KEY_THRESHOLDS,
            debounce_ms: DEBOUNCE_MS,
            debounce_mode: DebounceMode::NonBlocking,
            keypad_interval_ms: KEYPAD_INTERVAL_MS,
            display_interval_ms: DISPLAY_INTERVAL_MS,
        }
    }
}
