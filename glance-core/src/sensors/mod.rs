//! Sensors and their display routines
//!
//! Each sensor kind implements [`SensorDisplay`]. The registry stores one
//! [`SensorDescriptor`] per physical sensor (pin + routine) and the display
//! refresher dispatches through it; there is no switch over sensor kinds.

pub mod light;
pub mod motion;
pub mod registry;
pub mod temperature;

pub use light::LightLevel;
pub use motion::PirMotion;
pub use registry::{RegistryError, SensorDescriptor, SensorRegistry};
pub use temperature::Lm35Temperature;

use glance_hal::{AdcError, CharDisplay, CharDisplayExt, DisplayError, SensorIo};

use crate::config::{LIGHT_PIN, MOTION_PIN, TEMPERATURE_PIN};
use crate::format::TextBuf;

/// Capacity of a formatted value, terminator included
///
/// `"Value: "` takes 7 of the 16 columns, leaving 9 for value and unit.
pub const VALUE_CAPACITY: usize = 10;

/// Formatted sensor value
pub type ValueText = TextBuf<VALUE_CAPACITY>;

/// Shown in place of a value when the hardware read fails
pub const NO_READING: &str = "--";

/// Per-kind display routine
pub trait SensorDisplay {
    /// Header shown on the first line
    fn label(&self) -> &'static str;

    /// Unit appended to the value
    fn unit(&self) -> &'static str {
        ""
    }

    /// Sample the sensor on `pin` and format the value
    fn read_value(&self, pin: u8, io: &mut dyn SensorIo) -> Result<ValueText, AdcError>;

    /// Render the sensor registered at `index`
    ///
    /// The display has already been cleared by the caller.
    fn render(
        &self,
        _index: usize,
        pin: u8,
        io: &mut dyn SensorIo,
        lcd: &mut dyn CharDisplay,
    ) -> Result<(), DisplayError> {
        match self.read_value(pin, io) {
            Ok(value) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("sensor {} ({}): {}{}", _index, self.label(), value, self.unit());
                lcd.show_reading(self.label(), value.as_str(), self.unit())
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sensor {} read failed on pin {}: {}", _index, pin, _e);
                lcd.show_reading(self.label(), NO_READING, "")
            }
        }
    }
}

/// Append the reference board's sensors: temperature, light, motion
pub fn register_reference_sensors(registry: &mut SensorRegistry<'_>) -> Result<(), RegistryError> {
    registry.register(TEMPERATURE_PIN, &Lm35Temperature)?;
    registry.register(LIGHT_PIN, &LightLevel)?;
    registry.register(MOTION_PIN, &PirMotion)?;
    Ok(())
}

/// Registry for the reference board
pub fn reference_sensors() -> Result<SensorRegistry<'static>, RegistryError> {
    let mut registry = SensorRegistry::new();
    register_reference_sensors(&mut registry)?;
    Ok(registry)
}
