//! Millisecond clock over the embassy time driver

use embassy_time::Instant;
use glance_hal::Clock;

/// Clock backed by `embassy_time::Instant`
///
/// The 64-bit uptime is truncated to 32 bits, so the value wraps after
/// about 49.7 days like the `Clock` contract expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
