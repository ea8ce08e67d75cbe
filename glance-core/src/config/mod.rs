//! Configuration
//!
//! Everything here is fixed at compile time. Board wiring lives in
//! [`hardware`], tunables and capacities in [`types`].

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
