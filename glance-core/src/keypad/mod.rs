//! Resistor-ladder keypad
//!
//! All buttons share one analog input; each press pulls the input into a
//! distinct voltage band. The decoder maps a sample to a band, the poller
//! confirms a press across two samples, and the selection applies the
//! resulting action.

pub mod bindings;
pub mod decoder;
pub mod poller;
pub mod selection;

pub use bindings::{KeyAction, KeyBindings};
pub use decoder::{KeyDecoder, KeyId, KeypadError};
pub use poller::{KeypadPoller, PollerState};
pub use selection::Selection;
