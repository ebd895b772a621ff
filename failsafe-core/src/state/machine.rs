//! State machine definition
//!
//! The rest of the firmware gates its outputs on the current state.

use super::reason::FailureReason;

/// Supervisor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorState {
    /// Loop is alive and all checks pass
    #[default]
    Normal,
    /// Failure detected; outputs must be disabled. Terminal.
    SafeMode(FailureReason),
}

impl SupervisorState {
    /// Check if this is the safe-mode state
    pub const fn is_safe_mode(&self) -> bool {
        matches!(self, SupervisorState::SafeMode(_))
    }

    /// Check if this state allows actuating outputs
    pub const fn outputs_allowed(&self) -> bool {
        matches!(self, SupervisorState::Normal)
    }

    /// Reason recorded for this state
    pub const fn reason(&self) -> FailureReason {
        match self {
            SupervisorState::Normal => FailureReason::None,
            SupervisorState::SafeMode(reason) => *reason,
        }
    }

    /// Process a failure and return the next state
    ///
    /// Safe mode absorbs every further failure, keeping the first reason.
    pub const fn fail(self, reason: FailureReason) -> Self {
        match self {
            SupervisorState::Normal => SupervisorState::SafeMode(reason),
            SupervisorState::SafeMode(_) => self,
        }
    }
}
