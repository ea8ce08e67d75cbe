//! Fixed, ordered sensor registry

use heapless::Vec;

use glance_hal::{CharDisplay, DisplayError, SensorIo};

use super::SensorDisplay;
use crate::config::MAX_SENSORS;

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// All `MAX_SENSORS` slots are used
    Full,
}

/// One physical sensor: where it is wired and how it is shown
#[derive(Clone, Copy)]
pub struct SensorDescriptor<'a> {
    pin: u8,
    routine: &'a dyn SensorDisplay,
}

impl<'a> SensorDescriptor<'a> {
    /// Create a descriptor
    pub const fn new(pin: u8, routine: &'a dyn SensorDisplay) -> Self {
        Self { pin, routine }
    }

    /// Hardware pin
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Display routine
    pub fn routine(&self) -> &'a dyn SensorDisplay {
        self.routine
    }

    /// Run the display routine for this sensor registered at `index`
    pub fn render(
        &self,
        index: usize,
        io: &mut dyn SensorIo,
        lcd: &mut dyn CharDisplay,
    ) -> Result<(), DisplayError> {
        self.routine.render(index, self.pin, io, lcd)
    }
}

impl core::fmt::Debug for SensorDescriptor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SensorDescriptor")
            .field("pin", &self.pin)
            .field("label", &self.routine.label())
            .finish()
    }
}

/// Ordered sensor list, addressed by index
///
/// Populated at startup and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct SensorRegistry<'a> {
    sensors: Vec<SensorDescriptor<'a>, MAX_SENSORS>,
}

impl<'a> SensorRegistry<'a> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { sensors: Vec::new() }
    }

    /// Append a sensor
    pub fn register(&mut self, pin: u8, routine: &'a dyn SensorDisplay) -> Result<(), RegistryError> {
        self.sensors
            .push(SensorDescriptor::new(pin, routine))
            .map_err(|_| RegistryError::Full)
    }

    /// Number of registered sensors
    pub fn count(&self) -> usize {
        self.sensors.len()
    }

    /// Check if no sensor is registered
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Get the sensor at `index`
    ///
    /// Selection wraparound keeps the index in range during normal
    /// operation; an out-of-range index returns `None`.
    pub fn get(&self, index: usize) -> Option<&SensorDescriptor<'a>> {
        self.sensors.get(index)
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SensorDescriptor<'a>> {
        self.sensors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::{LightLevel, PirMotion};

    #[test]
    fn test_register_and_get() {
        let mut registry = SensorRegistry::new();
        assert!(registry.is_empty());

        registry.register(2, &LightLevel).unwrap();
        registry.register(15, &PirMotion).unwrap();

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.get(1).map(|s| s.pin()), Some(15));
        assert_eq!(registry.get(0).map(|s| s.routine().label()), Some("Light Level"));
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn test_full() {
        let mut registry = SensorRegistry::new();
        for pin in 0..MAX_SENSORS as u8 {
            registry.register(pin, &LightLevel).unwrap();
        }
        assert_eq!(registry.register(99, &LightLevel), Err(RegistryError::Full));
        assert_eq!(registry.count(), MAX_SENSORS);
    }

    #[test]
    fn test_same_kind_on_separate_pins() {
        let mut registry = SensorRegistry::new();
        registry.register(1, &LightLevel).unwrap();
        registry.register(2, &LightLevel).unwrap();

        let pins: std::vec::Vec<_> = registry.iter().map(|s| s.pin()).collect();
        assert_eq!(pins, [1, 2]);
    }
}
