//! Character grid display for Glance
//!
//! This crate provides [`TextGrid`], a memory-backed implementation of
//! [`glance_hal::CharDisplay`]. It behaves like an HD44780 panel (explicit
//! cursor, text clipped at the end of a line) and serves as the display
//! fake in host tests of the scheduling core.

#![no_std]

pub mod grid;

// Re-export key types
pub use grid::{TextGrid, Lcd1602, LCD_COLS, LCD_ROWS};
