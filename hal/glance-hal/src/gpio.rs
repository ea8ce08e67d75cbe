//! GPIO input abstractions
//!
//! Sensors are addressed by board pin number rather than by owned pin
//! handles, so a single implementation can serve every digital sensor in
//! the registry.

use crate::adc::AnalogInput;

/// Logic level read from a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if the level is high
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Check if the level is low
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital input by pin number
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Pins that are not configured as inputs read low.
pub trait DigitalInput {
    /// Read the current level of `pin`
    fn read_digital(&mut self, pin: u8) -> Level;
}

/// Everything a sensor display routine may sample
///
/// Display routines take `&mut dyn SensorIo` so that one routine type works
/// against real hardware and host fakes alike.
pub trait SensorIo: AnalogInput + DigitalInput {}

// Blanket implementation for types that implement both traits
impl<T: AnalogInput + DigitalInput> SensorIo for T {}
