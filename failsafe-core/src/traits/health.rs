//! Health check capability

/// A single monitored condition
///
/// Returns `true` while the condition is healthy. Checks are evaluated
/// synchronously from inside [`feed`](crate::safety::FailSafeSupervisor::feed),
/// so the time they take is charged to the caller's loop budget.
///
/// Every `FnMut() -> bool` is a health check, so closures and plain
/// functions can be registered directly. Types that carry hardware handles
/// (a GPIO input, an ADC channel) implement the trait themselves.
pub trait HealthCheck {
    /// Evaluate the condition
    fn is_healthy(&mut self) -> bool;
}

impl<F: FnMut() -> bool> HealthCheck for F {
    fn is_healthy(&mut self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Threshold {
        value: i16,
        limit: i16,
    }

    impl HealthCheck for Threshold {
        fn is_healthy(&mut self) -> bool {
            self.value <= self.limit
        }
    }

    fn always_ok() -> bool {
        true
    }

    #[test]
    fn test_closure_check() {
        let mut healthy = false;
        let mut check = || {
            healthy = !healthy;
            healthy
        };
        assert!(check.is_healthy());
        assert!(!check.is_healthy());
    }

    #[test]
    fn test_fn_pointer_check() {
        let mut check = always_ok as fn() -> bool;
        assert!(check.is_healthy());
    }

    #[test]
    fn test_struct_check() {
        let mut check = Threshold { value: 560, limit: 550 };
        assert!(!check.is_healthy());
        check.value = 450;
        assert!(check.is_healthy());
    }

    #[test]
    fn test_trait_object() {
        let mut check = Threshold { value: 0, limit: 10 };
        let dynamic: &mut dyn HealthCheck = &mut check;
        assert!(dynamic.is_healthy());
    }
}
