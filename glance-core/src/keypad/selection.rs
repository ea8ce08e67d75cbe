//! Selected sensor index

use super::bindings::KeyAction;

/// Index into the sensor registry that wraps at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    /// Start at the first of `count` entries
    pub const fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Currently selected index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of selectable entries
    pub fn count(&self) -> usize {
        self.count
    }

    /// Apply a key action and return the new index
    pub fn apply(&mut self, action: KeyAction) -> usize {
        match action {
            KeyAction::Up => self.next(),
            KeyAction::Down => self.previous(),
        }
    }

    /// Advance, wrapping past the last entry to the first
    pub fn next(&mut self) -> usize {
        if self.count == 0 {
            return self.index;
        }
        self.index += 1;
        if self.index >= self.count {
            self.index = 0;
        }
        self.index
    }

    /// Step back, wrapping before the first entry to the last
    pub fn previous(&mut self) -> usize {
        if self.count == 0 {
            return self.index;
        }
        self.index = match self.index.checked_sub(1) {
            Some(index) => index,
            None => self.count - 1,
        };
        self.index
    }
}
