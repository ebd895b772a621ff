//! Diagnostic output for safe-mode transitions

use crate::state::FailureReason;

/// Receives a notification each time the supervisor enters safe mode
///
/// The supervisor guards its transition, so a sink sees at most one call
/// per supervisor instance. Output format is up to the implementation.
pub trait DiagnosticSink {
    /// Report the transition into safe mode
    fn safe_mode_entered(&mut self, reason: FailureReason, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn safe_mode_entered(&mut self, reason: FailureReason, message: &str) {
        (**self).safe_mode_entered(reason, message)
    }
}

/// Sink that discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn safe_mode_entered(&mut self, _reason: FailureReason, _message: &str) {}
}

/// Sink that writes a banner to the defmt logger
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl DiagnosticSink for DefmtSink {
    fn safe_mode_entered(&mut self, reason: FailureReason, message: &str) {
        defmt::error!("============================");
        defmt::error!("FAILSAFE MODE ACTIVATED ({})", reason.as_str());
        defmt::error!("Reason: {=str}", message);
        defmt::error!("============================");
    }
}
