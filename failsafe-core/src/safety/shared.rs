//! Mutex-guarded supervisor for preemptive callers
//!
//! When an interrupt handler or a second executor needs to report a fault,
//! every state transition must run under mutual exclusion. This wrapper
//! puts the supervisor behind an embassy-sync blocking mutex; with
//! `CriticalSectionRawMutex` each call is one critical section.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::supervisor::{FailSafeSupervisor, SupervisorError, DEFAULT_MAX_CHECKS};
use crate::config::SupervisorConfig;
use crate::state::{FailureReason, SupervisorState};
use crate::traits::{Clock, DiagnosticSink, HealthCheck};

/// Supervisor shared between execution contexts
///
/// With a `Sync` raw mutex and `Send` clock and sink, this is `Sync` and can
/// live in a `static` reached from interrupt handlers. Health checks run
/// inside the lock and must not call back into the same shared supervisor.
pub struct SharedSupervisor<'a, M: RawMutex, C, S, const N: usize = DEFAULT_MAX_CHECKS> {
    inner: Mutex<M, RefCell<FailSafeSupervisor<'a, C, S, N>>>,
}

impl<'a, M, C, S, const N: usize> SharedSupervisor<'a, M, C, S, N>
where
    M: RawMutex,
    C: Clock + Send,
    S: DiagnosticSink + Send,
{
    /// Create a new shared supervisor in the normal state
    pub const fn new(clock: C, sink: S) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(FailSafeSupervisor::new(clock, sink))),
        }
    }

    /// Run `f` with exclusive access to the supervisor
    pub fn with<R>(&self, f: impl FnOnce(&mut FailSafeSupervisor<'a, C, S, N>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn initialize(&self, timeout_ms: u32) -> Result<(), SupervisorError> {
        self.with(|sup| sup.initialize(timeout_ms))
    }

    pub fn initialize_with(&self, config: &SupervisorConfig) -> Result<(), SupervisorError> {
        self.with(|sup| sup.initialize_with(config))
    }

    pub fn feed(&self) -> SupervisorState {
        self.with(|sup| sup.feed())
    }

    pub fn register_check(
        &self,
        name: &'a str,
        check: &'a mut (dyn HealthCheck + Send),
    ) -> Result<(), SupervisorError> {
        self.with(|sup| sup.register_check(name, check))
    }

    pub fn mark_critical_error(&self, message: &str) {
        self.with(|sup| sup.mark_critical_error(message))
    }

    pub fn trigger_manual_safe_mode(&self) {
        self.with(|sup| sup.trigger_manual_safe_mode())
    }

    pub fn is_safe_mode(&self) -> bool {
        self.with(|sup| sup.is_safe_mode())
    }

    pub fn last_failure_reason(&self) -> &'static str {
        self.with(|sup| sup.last_failure_reason())
    }

    pub fn failure_reason(&self) -> FailureReason {
        self.with(|sup| sup.failure_reason())
    }

    pub fn state(&self) -> SupervisorState {
        self.with(|sup| sup.state())
    }
}
