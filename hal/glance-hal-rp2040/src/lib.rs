//! RP2040-specific HAL for the sensor display firmware
//!
//! This crate provides RP2040 implementations of the shared `glance-hal`
//! traits:
//!
//! - ADC channel mapping (analog pin numbers to GPIO26-29)
//! - Sensor inputs by pin number ([`io::Rp2040SensorIo`])
//! - Millisecond clock over the embassy time driver

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod io;
pub mod time;

pub use adc::AdcChannel;
pub use io::Rp2040SensorIo;
pub use time::EmbassyClock;
