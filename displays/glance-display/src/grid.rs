//! Character grid buffer
//!
//! Stores the panel contents as ASCII bytes, one array per line.

use glance_hal::{CharDisplay, DisplayError};

/// Columns on the reference 16x2 panel
pub const LCD_COLS: usize = 16;

/// Lines on the reference 16x2 panel
pub const LCD_ROWS: usize = 2;

/// Reference 16x2 panel
pub type Lcd1602 = TextGrid<LCD_COLS, LCD_ROWS>;

/// Character shown for anything outside printable ASCII
const REPLACEMENT: u8 = b'?';

/// Memory-backed character display
#[derive(Clone)]
pub struct TextGrid<const COLS: usize, const ROWS: usize> {
    /// Current content, space filled
    cells: [[u8; COLS]; ROWS],
    /// Cursor (line, column)
    cursor: (usize, usize),
    /// Set by `init`
    initialized: bool,
    /// Number of `clear` calls since creation
    clears: u32,
}

impl<const COLS: usize, const ROWS: usize> Default for TextGrid<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> TextGrid<COLS, ROWS> {
    /// Create a new, uninitialized grid
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            cursor: (0, 0),
            initialized: false,
            clears: 0,
        }
    }

    /// Get the content of a line with trailing blanks removed
    pub fn line(&self, row: usize) -> Option<&str> {
        self.cells.get(row).map(|cells| {
            // Cells only ever hold printable ASCII
            core::str::from_utf8(cells).unwrap_or("").trim_end()
        })
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).filter_map(move |row| self.line(row))
    }

    /// Current cursor as (line, column)
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Number of times the grid has been cleared
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Check if `init` has been called
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn blank(&mut self) {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
    }

    fn check_ready(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

impl<const COLS: usize, const ROWS: usize> CharDisplay for TextGrid<COLS, ROWS> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = true;
        self.blank();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.blank();
        self.clears = self.clears.wrapping_add(1);
        Ok(())
    }

    fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), DisplayError> {
        self.check_ready()?;
        let (line, column) = (line as usize, column as usize);
        if line >= ROWS || column >= COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (line, column);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        self.check_ready()?;
        let (row, mut col) = self.cursor;
        for ch in text.chars() {
            // Clip at end of line
            if col >= COLS {
                break;
            }
            self.cells[row][col] = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                REPLACEMENT
            };
            col += 1;
        }
        self.cursor = (row, col);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS as u8, ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const ROWS: usize> defmt::Format for TextGrid<COLS, ROWS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextGrid[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, " | ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_hal::CharDisplayExt;

    fn ready() -> Lcd1602 {
        let mut lcd = Lcd1602::new();
        lcd.init().unwrap();
        lcd
    }

    #[test]
    fn test_requires_init() {
        let mut lcd = Lcd1602::new();
        assert_eq!(lcd.print("hi"), Err(DisplayError::NotInitialized));
        assert_eq!(lcd.clear(), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_print_at_cursor() {
        let mut lcd = ready();
        lcd.set_cursor(1, 3).unwrap();
        lcd.print("abc").unwrap();
        assert_eq!(lcd.line(0), Some(""));
        assert_eq!(lcd.line(1), Some("   abc"));
        assert_eq!(lcd.cursor(), (1, 6));
    }

    #[test]
    fn test_print_clips_at_line_end() {
        let mut lcd = ready();
        lcd.print("0123456789abcdefXYZ").unwrap();
        assert_eq!(lcd.line(0), Some("0123456789abcdef"));
        // Nothing spilled onto the second line
        assert_eq!(lcd.line(1), Some(""));
    }

    #[test]
    fn test_invalid_cursor() {
        let mut lcd = ready();
        assert_eq!(lcd.set_cursor(2, 0), Err(DisplayError::InvalidCoordinates));
        assert_eq!(lcd.set_cursor(0, 16), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_clear_resets_content() {
        let mut lcd = ready();
        lcd.print("hello").unwrap();
        lcd.clear().unwrap();
        assert_eq!(lcd.line(0), Some(""));
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.clear_count(), 1);
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut lcd = ready();
        lcd.print("23°C").unwrap();
        assert_eq!(lcd.line(0), Some("23?C"));
    }

    #[test]
    fn test_show_reading_layout() {
        let mut lcd = ready();
        lcd.show_reading("Temperature", "23.4", "C").unwrap();
        assert_eq!(lcd.line(0), Some("Temperature"));
        assert_eq!(lcd.line(1), Some("Value: 23.4C"));
    }
}
