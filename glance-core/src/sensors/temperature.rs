//! LM35 analog temperature sensor
//!
//! The LM35 outputs 10 mV per °C, so the Celsius value is the input
//! voltage in millivolts divided by ten.

use glance_hal::{AdcError, SensorIo, ADC_MAX, ADC_REF_MV};

use super::{SensorDisplay, ValueText};

/// Millivolts per degree Celsius
const MV_PER_DEGREE: f64 = 10.0;

/// Fractional digits shown
const PRECISION: u8 = 1;

/// LM35 temperature sensor
#[derive(Debug, Clone, Copy, Default)]
pub struct Lm35Temperature;

impl Lm35Temperature {
    /// Convert a raw reading to degrees Celsius
    pub fn celsius(raw: u16) -> f64 {
        let millivolts = raw.min(ADC_MAX) as f64 * ADC_REF_MV as f64 / ADC_MAX as f64;
        millivolts / MV_PER_DEGREE
    }
}

impl SensorDisplay for Lm35Temperature {
    fn label(&self) -> &'static str {
        "Temperature"
    }

    fn unit(&self) -> &'static str {
        "C"
    }

    fn read_value(&self, pin: u8, io: &mut dyn SensorIo) -> Result<ValueText, AdcError> {
        let raw = io.read_analog(pin)?;
        Ok(ValueText::decimal(Self::celsius(raw), PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::testing::FakeIo;
    use glance_display::Lcd1602;
    use glance_hal::CharDisplay;

    #[test]
    fn test_celsius() {
        assert_eq!(Lm35Temperature::celsius(0), 0.0);
        assert!((Lm35Temperature::celsius(ADC_MAX) - 500.0).abs() < 1e-9);
        // 50 counts ≈ 244 mV
        assert!((Lm35Temperature::celsius(50) - 24.438).abs() < 0.001);
    }

    #[test]
    fn test_render() {
        let mut io = FakeIo::default().with_analog(1, 50);
        let mut lcd = Lcd1602::new();
        lcd.init().unwrap();

        Lm35Temperature.render(0, 1, &mut io, &mut lcd).unwrap();
        assert_eq!(lcd.line(0), Some("Temperature"));
        assert_eq!(lcd.line(1), Some("Value: 24.4C"));
    }

    #[test]
    fn test_full_scale_fits() {
        let mut io = FakeIo::default().with_analog(1, ADC_MAX);
        let value = Lm35Temperature.read_value(1, &mut io).unwrap();
        assert_eq!(value.as_str(), "500.0");
    }
}
