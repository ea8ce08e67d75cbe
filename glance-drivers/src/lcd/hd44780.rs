//! HD44780 Character LCD Driver
//!
//! Driver for HD44780-compatible character LCDs wired in 4-bit parallel
//! mode (RS, E and D4-D7; RW tied to ground). Defaults to the 16x2 module
//! of the common LCD keypad shield.
//!
//! The controller is write-only in this wiring, so busy-flag polling is
//! replaced by fixed worst-case delays after every command.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use glance_hal::{CharDisplay, DisplayError};

/// Default display dimensions
const DEFAULT_COLUMNS: u8 = 16;
const DEFAULT_LINES: u8 = 2;

/// DDRAM columns per line in two-line mode
const MAX_COLUMNS: u8 = 40;

/// DDRAM address of the first column of each line
const LINE_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// HD44780 commands
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const TWO_LINES: u8 = 0x08;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    /// High nibble of the 8-bit function set, sent during reset
    pub const RESET_NIBBLE: u8 = 0x03;
    /// High nibble of the 4-bit function set
    pub const FOUR_BIT_NIBBLE: u8 = 0x02;
}

/// Timings (microseconds)
mod timing {
    /// Power-on settle time
    pub const POWER_ON_US: u32 = 50_000;
    /// After the first reset nibble
    pub const RESET_LONG_US: u32 = 4_500;
    /// After the third reset nibble
    pub const RESET_SHORT_US: u32 = 150;
    /// Enable pulse width and setup time
    pub const PULSE_US: u32 = 1;
    /// Execution time of most commands
    pub const COMMAND_US: u32 = 100;
    /// Execution time of clear and home
    pub const CLEAR_US: u32 = 2_000;
}

/// HD44780 in 4-bit mode
///
/// All six control and data pins share one type; board crates pass their
/// HAL's output pin (for embassy-rp, `Output<'static>`).
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4, D5, D6, D7
    data: [P; 4],
    delay: D,
    columns: u8,
    lines: u8,
    /// Cursor column, tracked to drop text past the line end
    column: u8,
    initialized: bool,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver for a 16x2 module
    ///
    /// The display is not touched until [`CharDisplay::init`].
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            columns: DEFAULT_COLUMNS,
            lines: DEFAULT_LINES,
            column: 0,
            initialized: false,
        }
    }

    /// Override the module geometry (at most 40 columns and 4 lines)
    pub fn with_size(mut self, columns: u8, lines: u8) -> Self {
        self.columns = columns.min(MAX_COLUMNS);
        self.lines = lines.min(LINE_OFFSETS.len() as u8);
        self
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    /// Latch the low four bits of `nibble` on the data lines
    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let result = if nibble & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| DisplayError::Communication)?;
        }

        self.en.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(timing::PULSE_US);
        self.en.set_low().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(timing::PULSE_US);
        Ok(())
    }

    /// Send a full byte as two nibbles, high first
    fn send(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        let rs = if is_data {
            self.rs.set_high()
        } else {
            self.rs.set_low()
        };
        rs.map_err(|_| DisplayError::Communication)?;

        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)?;
        self.delay.delay_us(timing::COMMAND_US);
        Ok(())
    }

    fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.send(c, false)
    }
}

impl<P, D> CharDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_us(timing::POWER_ON_US);
        self.rs.set_low().map_err(|_| DisplayError::Communication)?;
        self.en.set_low().map_err(|_| DisplayError::Communication)?;

        // Reset by instruction: three 8-bit function sets, then switch to 4-bit
        self.write_nibble(cmd::RESET_NIBBLE)?;
        self.delay.delay_us(timing::RESET_LONG_US);
        self.write_nibble(cmd::RESET_NIBBLE)?;
        self.delay.delay_us(timing::RESET_LONG_US);
        self.write_nibble(cmd::RESET_NIBBLE)?;
        self.delay.delay_us(timing::RESET_SHORT_US);
        self.write_nibble(cmd::FOUR_BIT_NIBBLE)?;
        self.delay.delay_us(timing::COMMAND_US);

        let function = if self.lines > 1 {
            cmd::FUNCTION_SET | cmd::TWO_LINES
        } else {
            cmd::FUNCTION_SET
        };
        self.command(function)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(timing::CLEAR_US);
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)?;

        self.column = 0;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("HD44780 initialized ({}x{})", self.columns, self.lines);

        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(timing::CLEAR_US);
        self.column = 0;
        Ok(())
    }

    fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if line >= self.lines || column >= self.columns {
            return Err(DisplayError::InvalidCoordinates);
        }
        let addr = LINE_OFFSETS[line as usize] + column;
        self.command(cmd::SET_DDRAM_ADDR | addr)?;
        self.column = column;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        for ch in text.chars() {
            if self.column >= self.columns {
                break;
            }
            // ROM A00 matches ASCII only in the printable range
            let byte = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            self.send(byte, true)?;
            self.column += 1;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.columns, self.lines)
    }
}
