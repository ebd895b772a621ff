//! Fail-safe supervisor implementation
//!
//! Monitors main-loop liveness and a registry of health checks, and latches
//! into safe mode on the first failure.

use heapless::{String, Vec};

use crate::config::SupervisorConfig;
use crate::state::{FailureReason, SupervisorState};
use crate::traits::{Clock, DiagnosticSink, HealthCheck};

/// Default number of health check slots
pub const DEFAULT_MAX_CHECKS: usize = 8;

/// Maximum stored diagnostic message length in bytes
pub const MAX_MESSAGE_LEN: usize = 64;

/// Message recorded when the loop misses its budget
pub const LOOP_TIMEOUT_MESSAGE: &str = "Loop timeout detected.";

/// Message recorded for a manual trigger
pub const MANUAL_MESSAGE: &str = "Manually triggered safe mode.";

/// Prefix of the message recorded when a health check fails
pub const CHECK_FAILED_PREFIX: &str = "Check failed: ";

/// Errors returned for supervisor misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorError {
    /// `initialize` was already called; the time budget is fixed
    AlreadyInitialized,
    /// No free health check slot
    RegistryFull,
}

/// A named health check in the registry
struct CheckEntry<'a> {
    name: &'a str,
    check: &'a mut (dyn HealthCheck + Send),
}

/// Loop liveness and health supervisor
///
/// Owned by the application and fed once per main-loop iteration. Any
/// detected failure moves it into [`SupervisorState::SafeMode`], which it
/// never leaves.
///
/// Type parameters:
/// - `C`: time source
/// - `S`: receiver of the safe-mode notification
/// - `N`: health check capacity
pub struct FailSafeSupervisor<'a, C, S, const N: usize = DEFAULT_MAX_CHECKS> {
    clock: C,
    sink: S,
    /// Time budget between feeds (ms), `None` until initialized
    timeout_ms: Option<u32>,
    /// Timestamp of the last successful feed (ms)
    last_feed_ms: u32,
    state: SupervisorState,
    message: String<MAX_MESSAGE_LEN>,
    checks: Vec<CheckEntry<'a>, N>,
}

impl<'a, C: Clock, S: DiagnosticSink, const N: usize> FailSafeSupervisor<'a, C, S, N> {
    /// Create a new supervisor in the normal state
    ///
    /// No time budget is enforced until [`initialize`](Self::initialize).
    pub const fn new(clock: C, sink: S) -> Self {
        Self {
            clock,
            sink,
            timeout_ms: None,
            last_feed_ms: 0,
            state: SupervisorState::Normal,
            message: String::new(),
            checks: Vec::new(),
        }
    }

    /// Set the time budget and start measuring from now
    ///
    /// A budget of zero is legal: any later feed with nonzero elapsed time
    /// enters safe mode. In safe mode the budget is recorded but the last
    /// feed timestamp is left untouched.
    pub fn initialize(&mut self, timeout_ms: u32) -> Result<(), SupervisorError> {
        if self.timeout_ms.is_some() {
            return Err(SupervisorError::AlreadyInitialized);
        }

        self.timeout_ms = Some(timeout_ms);

        // The timestamp is frozen once safe mode has been entered
        if !self.state.is_safe_mode() {
            self.last_feed_ms = self.clock.now_ms();
        }
        Ok(())
    }

    /// Initialize from a configuration record
    pub fn initialize_with(&mut self, config: &SupervisorConfig) -> Result<(), SupervisorError> {
        self.initialize(config.loop_timeout_ms)
    }

    /// Confirm the loop is alive
    ///
    /// Checks the elapsed time against the budget, then runs every
    /// registered check in registration order, stopping at the first
    /// failure. Only a fully successful feed moves the timestamp forward.
    /// Returns the state after the call.
    pub fn feed(&mut self) -> SupervisorState {
        if self.state.is_safe_mode() {
            return self.state;
        }

        if let Some(timeout_ms) = self.timeout_ms {
            if self.clock.elapsed_since(self.last_feed_ms) > timeout_ms {
                self.enter_safe_mode(FailureReason::LoopTimeout, &[LOOP_TIMEOUT_MESSAGE]);
                return self.state;
            }
        }

        let failed = self.checks.iter_mut().find_map(|entry| {
            if entry.check.is_healthy() {
                None
            } else {
                Some(entry.name)
            }
        });

        if let Some(name) = failed {
            self.enter_safe_mode(FailureReason::CriticalError, &[CHECK_FAILED_PREFIX, name]);
            return self.state;
        }

        // Read the clock again so check latency counts against the next budget
        self.last_feed_ms = self.clock.now_ms();
        self.state
    }

    /// Append a health check to the registry
    ///
    /// Allowed in any state. A check registered after safe mode is stored
    /// but never evaluated. Duplicate names are kept as separate entries.
    /// Checks must be `Send` so a [`SharedSupervisor`](super::SharedSupervisor)
    /// holding them can be reached from other execution contexts.
    pub fn register_check(
        &mut self,
        name: &'a str,
        check: &'a mut (dyn HealthCheck + Send),
    ) -> Result<(), SupervisorError> {
        self.checks
            .push(CheckEntry { name, check })
            .map_err(|_| SupervisorError::RegistryFull)
    }

    /// Enter safe mode for a fault detected outside the check registry
    pub fn mark_critical_error(&mut self, message: &str) {
        self.enter_safe_mode(FailureReason::CriticalError, &[message]);
    }

    /// Enter safe mode on request
    pub fn trigger_manual_safe_mode(&mut self) {
        self.enter_safe_mode(FailureReason::Manual, &[MANUAL_MESSAGE]);
    }

    /// Check if safe mode has been entered
    pub fn is_safe_mode(&self) -> bool {
        self.state.is_safe_mode()
    }

    /// Human-readable description of the recorded reason
    pub fn last_failure_reason(&self) -> &'static str {
        self.state.reason().as_str()
    }

    /// Recorded reason, `FailureReason::None` while normal
    pub fn failure_reason(&self) -> FailureReason {
        self.state.reason()
    }

    /// Current state
    pub fn state(&self) -> SupervisorState {
        self.state
    }

    /// Diagnostic message recorded on the transition, empty while normal
    pub fn last_message(&self) -> &str {
        self.message.as_str()
    }

    /// Configured time budget
    pub fn timeout_ms(&self) -> Option<u32> {
        self.timeout_ms
    }

    /// Check if a time budget has been set
    pub fn is_initialized(&self) -> bool {
        self.timeout_ms.is_some()
    }

    /// Timestamp of the last successful feed
    pub fn last_feed_ms(&self) -> u32 {
        self.last_feed_ms
    }

    /// Time since the last successful feed
    pub fn elapsed_since_feed_ms(&self) -> u32 {
        self.clock.elapsed_since(self.last_feed_ms)
    }

    /// Number of registered health checks
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Registered check names in evaluation order
    pub fn check_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.checks.iter().map(|entry| entry.name)
    }

    /// Diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Transition into safe mode
    ///
    /// Runs at most once; later failures leave the first reason and message
    /// in place and do not notify the sink again.
    fn enter_safe_mode(&mut self, reason: FailureReason, parts: &[&str]) {
        if self.state.is_safe_mode() {
            return;
        }

        self.state = self.state.fail(reason);
        self.message.clear();
        for part in parts {
            push_truncated(&mut self.message, part);
        }

        self.sink.safe_mode_entered(reason, self.message.as_str());
    }
}

/// Append as much of `src` as fits, never splitting a character
fn push_truncated<const M: usize>(dst: &mut String<M>, src: &str) {
    for c in src.chars() {
        if dst.push(c).is_err() {
            break;
        }
    }
}
