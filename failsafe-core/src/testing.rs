//! Test doubles for the collaborator traits

use core::sync::atomic::{AtomicU32, Ordering};

use heapless::{String, Vec};

use crate::state::FailureReason;
use crate::traits::{Clock, DiagnosticSink};

/// Manually driven clock
///
/// Atomic so it can be shared with checks and other threads.
#[derive(Debug, Default)]
pub struct MockClock {
    now: AtomicU32,
}

impl MockClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: AtomicU32::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now.store(now_ms, Ordering::Relaxed);
    }

    /// Advance with wraparound, like a hardware counter
    pub fn advance(&self, delta_ms: u32) {
        self.now.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.load(Ordering::Relaxed)
    }
}

/// Call counter for instrumenting health checks
#[derive(Debug, Default)]
pub struct Counter {
    calls: AtomicU32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

/// Sink that records every notification
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<(FailureReason, String<128>), 8>,
}

impl RecordingSink {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn last(&self) -> Option<(FailureReason, &str)> {
        self.entries
            .last()
            .map(|(reason, message)| (*reason, message.as_str()))
    }
}

impl DiagnosticSink for RecordingSink {
    fn safe_mode_entered(&mut self, reason: FailureReason, message: &str) {
        let mut text = String::new();
        text.push_str(message).unwrap();
        self.entries.push((reason, text)).unwrap();
    }
}
