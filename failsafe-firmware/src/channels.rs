//! Shared state between Embassy tasks
//!
//! Values published by background tasks and read by health checks.

use portable_atomic::{AtomicU32, Ordering};

/// Heartbeat counter, bumped by the heartbeat task
///
/// Wraps at `u32::MAX`; readers only compare for change.
pub static HEARTBEAT: AtomicU32 = AtomicU32::new(0);

/// Record one heartbeat
pub fn beat() {
    HEARTBEAT.fetch_add(1, Ordering::Relaxed);
}

/// Current heartbeat count
pub fn heartbeat_count() -> u32 {
    HEARTBEAT.load(Ordering::Relaxed)
}
