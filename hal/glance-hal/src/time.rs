//! Time source abstraction
//!
//! Blocking delays use `embedded_hal::delay::DelayNs` directly; only the
//! monotonic clock needs a trait of its own.

/// Monotonic millisecond clock
///
/// The counter is 32 bits wide and wraps after roughly 49.7 days.
/// Consumers must compare timestamps with wrapping arithmetic.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}
