//! Supervisor clock backed by the Embassy time driver

use embassy_time::Instant;

use failsafe_core::Clock;

/// Millisecond clock from `embassy_time::Instant`
///
/// Truncated to 32 bits, so it wraps roughly every 49.7 days. The
/// supervisor only compares differences and is unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
