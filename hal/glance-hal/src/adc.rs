//! Analog input abstraction
//!
//! The core works in the reference hardware's units: a 10-bit reading
//! (0-1023) spanning 0-5 V. Chips with a different converter resolution
//! scale their raw samples into this range.

/// Maximum value returned by [`AnalogInput::read_analog`]
pub const ADC_MAX: u16 = 1023;

/// Reference voltage corresponding to [`ADC_MAX`], in millivolts
pub const ADC_REF_MV: u32 = 5000;

/// Errors that can occur during an analog read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Pin has no analog channel
    InvalidPin,
    /// Conversion did not complete
    ConversionFailed,
}

/// Analog input by pin number
pub trait AnalogInput {
    /// Sample `pin` and return a value in `0..=ADC_MAX`
    fn read_analog(&mut self, pin: u8) -> Result<u16, AdcError>;
}
