//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in glance-hal for external components:
//!
//! - Character LCDs (HD44780 in 4-bit parallel mode)

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
