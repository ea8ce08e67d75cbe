//! Reference hardware wiring
//!
//! Analog pins are numbered by ADC input (A0 = 0), digital pins by GPIO.
//! Each sensor has its own input; no two sensors share a pin.

/// Keypad resistor ladder input (A0)
pub const KEYPAD_PIN: u8 = 0;

/// LM35 temperature sensor output (A1)
pub const TEMPERATURE_PIN: u8 = 1;

/// Light-dependent resistor divider (A2)
pub const LIGHT_PIN: u8 = 2;

/// PIR motion sensor output (GPIO15)
pub const MOTION_PIN: u8 = 15;

/// Upper ADC bound of each keypad band, ascending
///
/// Matches the five-button LCD keypad shield. A reading at or above the
/// last entry means no button is pressed.
pub const KEY_THRESHOLDS: [u16; 5] = [50, 200, 400, 600, 800];

/// Key identifiers on the reference keypad (index into [`KEY_THRESHOLDS`])
pub mod keys {
    use crate::keypad::KeyId;

    pub const RIGHT: KeyId = KeyId(0);
    pub const UP: KeyId = KeyId(1);
    pub const DOWN: KeyId = KeyId(2);
    pub const LEFT: KeyId = KeyId(3);
    pub const SELECT: KeyId = KeyId(4);
}

/// Character columns on the panel
pub const LCD_COLUMNS: u8 = 16;

/// Character lines on the panel
pub const LCD_LINES: u8 = 2;
