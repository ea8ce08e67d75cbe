//! Board wiring
//!
//! Raspberry Pi Pico carrying the 16x2 LCD keypad shield pinout:
//!
//! | Signal      | Pico pin       | Shield pin |
//! |-------------|----------------|------------|
//! | LCD RS      | GPIO8          | D8         |
//! | LCD E       | GPIO9          | D9         |
//! | LCD D4-D7   | GPIO4-GPIO7    | D4-D7      |
//! | Keypad      | GPIO26 (ADC0)  | A0         |
//! | Temperature | GPIO27 (ADC1)  | A1         |
//! | Light       | GPIO28 (ADC2)  | A2         |
//! | Motion      | GPIO15         | -          |
//!
//! Analog pin numbers used by the core are ADC channel indices; the
//! digital motion input is addressed by its GPIO number.

use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_time::Delay;
use glance_core::config::{
    KEYPAD_PIN, LCD_COLUMNS, LCD_LINES, LIGHT_PIN, MOTION_PIN, TEMPERATURE_PIN,
};
use glance_drivers::lcd::Hd44780;
use glance_hal_rp2040::io::WiringError;
use glance_hal_rp2040::{AdcChannel, Rp2040SensorIo};

/// Main loop period (ms); must be well below the shortest task interval
pub const LOOP_TICK_MS: u64 = 10;

/// LCD driver type for this board
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// Peripherals the application owns
pub struct Board {
    pub lcd: Lcd,
    pub io: Rp2040SensorIo<'static>,
}

/// Errors while wiring the board
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// A configured analog pin has no ADC channel
    NoAdcChannel(u8),
    /// Digital input wiring failed
    Wiring(WiringError),
}

impl From<WiringError> for BoardError {
    fn from(e: WiringError) -> Self {
        Self::Wiring(e)
    }
}

fn channel(pin: u8) -> Result<AdcChannel, BoardError> {
    AdcChannel::from_analog_pin(pin).ok_or(BoardError::NoAdcChannel(pin))
}

/// Take the board's pins and build the LCD driver and sensor inputs
pub fn init(p: Peripherals) -> Result<Board, BoardError> {
    let lcd = Hd44780::new(
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        [
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
        ],
        Delay,
    )
    .with_size(LCD_COLUMNS, LCD_LINES);

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let mut io = Rp2040SensorIo::new(adc)
        .with_analog(channel(KEYPAD_PIN)?, Channel::new_pin(p.PIN_26, Pull::None))
        .with_analog(channel(TEMPERATURE_PIN)?, Channel::new_pin(p.PIN_27, Pull::None))
        .with_analog(channel(LIGHT_PIN)?, Channel::new_pin(p.PIN_28, Pull::None));

    // PIR modules drive the line actively; the pull-down keeps an unplugged
    // sensor reading "None"
    io.add_digital(MOTION_PIN, Input::new(p.PIN_15, Pull::Down))?;

    Ok(Board { lcd, io })
}
