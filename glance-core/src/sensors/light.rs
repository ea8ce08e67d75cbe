//! Light level from an LDR voltage divider, shown as a percentage

use glance_hal::{AdcError, SensorIo, ADC_MAX};

use super::{SensorDisplay, ValueText};

/// Light-dependent resistor sensor
#[derive(Debug, Clone, Copy, Default)]
pub struct LightLevel;

impl LightLevel {
    /// Convert a raw reading to 0-100 %
    pub fn percent(raw: u16) -> u32 {
        raw.min(ADC_MAX) as u32 * 100 / ADC_MAX as u32
    }
}

impl SensorDisplay for LightLevel {
    fn label(&self) -> &'static str {
        "Light Level"
    }

    fn unit(&self) -> &'static str {
        "%"
    }

    fn read_value(&self, pin: u8, io: &mut dyn SensorIo) -> Result<ValueText, AdcError> {
        let raw = io.read_analog(pin)?;
        Ok(ValueText::unsigned(Self::percent(raw), 0))
    }
}
