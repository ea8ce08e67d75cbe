//! Display refresh
//!
//! One refresh clears the panel and hands it to the display routine of the
//! selected sensor.

use glance_hal::{CharDisplay, DisplayError, SensorIo};

use crate::sensors::SensorRegistry;

/// Errors from a display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshError {
    /// No sensor registered at the selected index
    NoSensor(usize),
    /// Display write failed
    Display(DisplayError),
}

impl From<DisplayError> for RefreshError {
    fn from(e: DisplayError) -> Self {
        RefreshError::Display(e)
    }
}

/// Redraw the panel for the sensor at `selected`
pub fn refresh(
    registry: &SensorRegistry<'_>,
    selected: usize,
    io: &mut dyn SensorIo,
    lcd: &mut dyn CharDisplay,
) -> Result<(), RefreshError> {
    lcd.clear()?;
    let sensor = registry
        .get(selected)
        .ok_or(RefreshError::NoSensor(selected))?;
    sensor.render(selected, io, lcd)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LIGHT_PIN, MOTION_PIN, TEMPERATURE_PIN};
    use crate::sensors::reference_sensors;
    use crate::sensors::testing::FakeIo;
    use glance_display::Lcd1602;
    use glance_hal::Level;

    fn io() -> FakeIo {
        FakeIo::default()
            .with_analog(TEMPERATURE_PIN, 47)
            .with_analog(LIGHT_PIN, 1023)
            .with_digital(MOTION_PIN, Level::High)
    }

    fn lcd() -> Lcd1602 {
        let mut lcd = Lcd1602::new();
        lcd.init().unwrap();
        lcd
    }

    #[test]
    fn test_dispatches_to_selected_sensor() {
        let registry = reference_sensors().unwrap();
        let mut io = io();
        let mut lcd = lcd();

        refresh(&registry, 0, &mut io, &mut lcd).unwrap();
        assert_eq!(lcd.line(0), Some("Temperature"));
        assert_eq!(lcd.line(1), Some("Value: 23.0C"));

        refresh(&registry, 1, &mut io, &mut lcd).unwrap();
        assert_eq!(lcd.line(0), Some("Light Level"));
        assert_eq!(lcd.line(1), Some("Value: 100%"));

        refresh(&registry, 2, &mut io, &mut lcd).unwrap();
        assert_eq!(lcd.line(0), Some("Motion"));
        assert_eq!(lcd.line(1), Some("Value: Detected"));
    }

    #[test]
    fn test_clears_before_drawing() {
        let registry = reference_sensors().unwrap();
        let mut io = io();
        let mut lcd = lcd();

        // Longer header first, shorter one must not leave residue
        refresh(&registry, 1, &mut io, &mut lcd).unwrap();
        refresh(&registry, 2, &mut io, &mut lcd).unwrap();
        assert_eq!(lcd.line(0), Some("Motion"));
        assert_eq!(lcd.clear_count(), 2);
    }

    #[test]
    fn test_out_of_range_index() {
        let registry = reference_sensors().unwrap();
        let mut io = io();
        let mut lcd = lcd();

        assert_eq!(
            refresh(&registry, 3, &mut io, &mut lcd),
            Err(RefreshError::NoSensor(3))
        );
    }

    #[test]
    fn test_display_error_propagates() {
        let registry = reference_sensors().unwrap();
        let mut io = io();
        let mut lcd = Lcd1602::new();

        assert_eq!(
            refresh(&registry, 0, &mut io, &mut lcd),
            Err(RefreshError::Display(DisplayError::NotInitialized))
        );
    }
}
