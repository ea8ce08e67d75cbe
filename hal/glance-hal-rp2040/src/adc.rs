//! ADC channel management
//!
//! RP2040 has a single ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! Sensors are addressed by analog pin number (A0-A3), which is the
//! channel index of ADC0-ADC3.

/// Native ADC resolution in bits
pub const NATIVE_BITS: u32 = 12;

/// Resolution of the `AnalogInput` contract in bits
pub const CONTRACT_BITS: u32 = 10;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcChannel {
    /// Number of external channels
    pub const COUNT: usize = 4;

    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> u8 {
        26 + self.index() as u8
    }

    /// Channel index, equal to the analog pin number
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get ADC channel from an analog pin number
    pub fn from_analog_pin(pin: u8) -> Option<Self> {
        match pin {
            0 => Some(AdcChannel::Adc0),
            1 => Some(AdcChannel::Adc1),
            2 => Some(AdcChannel::Adc2),
            3 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        gpio.checked_sub(26).and_then(Self::from_analog_pin)
    }
}

/// Scale a native 12-bit sample down to the 10-bit contract
pub fn to_contract(raw: u16) -> u16 {
    raw >> (NATIVE_BITS - CONTRACT_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mapping() {
        assert_eq!(AdcChannel::from_analog_pin(0), Some(AdcChannel::Adc0));
        assert_eq!(AdcChannel::from_analog_pin(3).map(|c| c.gpio()), Some(29));
        assert_eq!(AdcChannel::from_analog_pin(4), None);
        assert_eq!(AdcChannel::from_gpio(27), Some(AdcChannel::Adc1));
        assert_eq!(AdcChannel::from_gpio(25), None);
        assert_eq!(AdcChannel::from_gpio(30), None);
    }

    #[test]
    fn test_scaling() {
        assert_eq!(to_contract(0), 0);
        assert_eq!(to_contract(4095), 1023);
        assert_eq!(to_contract(2048), 512);
    }
}
