//! Board-agnostic core logic for the sensor display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Number formatting into fixed-size buffers
//! - Resistor-ladder keypad decoding and debounced polling
//! - Sensor registry and per-sensor display routines
//! - Display refresh
//! - Cooperative periodic-task scheduler
//! - Application state and task wiring
//! - Compile-time configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod format;
pub mod keypad;
pub mod refresh;
pub mod scheduler;
pub mod sensors;
