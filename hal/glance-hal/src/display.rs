//! Character display abstraction
//!
//! Models an HD44780-style character grid: a cursor that is positioned
//! explicitly and text that is written from the cursor onwards.

/// Errors that can occur with the character display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin write failed
    Communication,
    /// Cursor position outside the grid
    InvalidCoordinates,
    /// Display used before `init`
    NotInitialized,
}

/// Character display primitive
///
/// Implementations drive a fixed-width, fixed-height character grid.
/// Text written past the end of a line is dropped, not wrapped.
pub trait CharDisplay {
    /// Bring the display into a known state (cleared, cursor home)
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the entire display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `line`: Line number (0-based)
    /// - `column`: Column number (0-based)
    fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor, advancing it
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Grid size as (columns, lines)
    fn dimensions(&self) -> (u8, u8);
}

/// Helper trait for the sensor reading layout
pub trait CharDisplayExt: CharDisplay {
    /// Write a sensor reading
    ///
    /// Layout:
    /// ```text
    /// Temperature
    /// Value: 23.4C
    /// ```
    fn show_reading(&mut self, header: &str, value: &str, unit: &str) -> Result<(), DisplayError> {
        self.set_cursor(0, 0)?;
        self.print(header)?;
        self.set_cursor(1, 0)?;
        self.print("Value: ")?;
        self.print(value)?;
        if !unit.is_empty() {
            self.print(unit)?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharDisplay types, trait objects included
impl<T: CharDisplay + ?Sized> CharDisplayExt for T {}
