//! Monotonic millisecond clock

/// Source of monotonic time
///
/// The counter is allowed to wrap around at `u32::MAX`. The supervisor only
/// ever looks at differences between two readings, computed with
/// wrapping subtraction, so rollover is invisible to it.
pub trait Clock {
    /// Current value of the millisecond counter
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `earlier`, tolerant of counter rollover
    fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
