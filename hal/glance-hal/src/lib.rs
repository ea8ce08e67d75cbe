//! Glance Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sensor display core consumes.
//! Chip-specific crates implement them, and host tests implement them with
//! in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (glance-core, firmware)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glance-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ glance-hal-   │       │ glance-display│
//! │    rp2040     │       │  (TextGrid)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AnalogInput`] - 10-bit analog reads by pin
//! - [`gpio::DigitalInput`] - Digital reads by pin
//! - [`display::CharDisplay`] - Character LCD primitives
//! - [`time::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod display;
pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput, ADC_MAX, ADC_REF_MV};
pub use display::{CharDisplay, CharDisplayExt, DisplayError};
pub use gpio::{DigitalInput, Level, SensorIo};
pub use time::Clock;
