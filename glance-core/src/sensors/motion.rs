//! PIR motion sensor (digital output, high while motion is detected)

use glance_hal::{AdcError, SensorIo};

use super::{SensorDisplay, ValueText};

/// Passive infrared motion sensor
#[derive(Debug, Clone, Copy, Default)]
pub struct PirMotion;

impl SensorDisplay for PirMotion {
    fn label(&self) -> &'static str {
        "Motion"
    }

    fn read_value(&self, pin: u8, io: &mut dyn SensorIo) -> Result<ValueText, AdcError> {
        let text = if io.read_digital(pin).is_high() {
            "Detected"
        } else {
            "None"
        };
        Ok(ValueText::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::testing::FakeIo;
    use glance_display::Lcd1602;
    use glance_hal::{CharDisplay, Level};

    #[test]
    fn test_detected() {
        let mut io = FakeIo::default().with_digital(15, Level::High);
        let mut lcd = Lcd1602::new();
        lcd.init().unwrap();

        PirMotion.render(2, 15, &mut io, &mut lcd).unwrap();
        assert_eq!(lcd.line(0), Some("Motion"));
        assert_eq!(lcd.line(1), Some("Value: Detected"));
    }

    #[test]
    fn test_idle() {
        let mut io = FakeIo::default().with_digital(15, Level::Low);
        let value = PirMotion.read_value(15, &mut io).unwrap();
        assert_eq!(value.as_str(), "None");
    }
}
