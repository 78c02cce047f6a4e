//! Verification state management

use leptos::prelude::*;

use crate::services::verification::ConnectOutcome;

/// Outcome flags of the age-verification flow. Both start false; a
/// successful attempt sets `verified` (clearing `failed`), a rejected
/// presentation sets `failed` and leaves `verified` alone. Every other
/// outcome changes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerificationStatus {
    pub verified: bool,
    pub failed: bool,
}

impl VerificationStatus {
    pub fn apply(&mut self, outcome: &ConnectOutcome) {
        match outcome {
            ConnectOutcome::Verified => {
                self.verified = true;
                self.failed = false;
            }
            ConnectOutcome::PresentationRejected => {
                self.failed = true;
            }
            ConnectOutcome::ProviderNotFound
            | ConnectOutcome::ConnectionRefused
            | ConnectOutcome::AccountRequestFailed(_) => {}
        }
    }
}

/// Global verification context
#[derive(Clone, Copy)]
pub struct VerificationContext {
    pub status: RwSignal<VerificationStatus>,
}

impl VerificationContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(VerificationStatus::default()),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.status.with(|status| status.verified)
    }

    pub fn has_failed(&self) -> bool {
        self.status.with(|status| status.failed)
    }

    pub fn record(&self, outcome: &ConnectOutcome) {
        self.status.update(|status| status.apply(outcome));
    }

    /// Start a fresh attempt. Called when the landing view mounts so flags
    /// from an earlier visit never leak into a new one.
    pub fn reset(&self) {
        self.status.set(VerificationStatus::default());
    }
}

impl Default for VerificationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_verification_context() -> VerificationContext {
    let context = VerificationContext::new();
    provide_context(context);
    context
}

pub fn use_verification_context() -> VerificationContext {
    expect_context::<VerificationContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unverified() {
        let status = VerificationStatus::default();
        assert!(!status.verified);
        assert!(!status.failed);
    }

    #[test]
    fn verified_clears_failed() {
        let mut status = VerificationStatus {
            verified: false,
            failed: true,
        };
        status.apply(&ConnectOutcome::Verified);
        assert!(status.verified);
        assert!(!status.failed);
    }

    #[test]
    fn rejection_keeps_earlier_verified_flag() {
        // Nothing resets `verified`; a later rejection only sets `failed`.
        let mut status = VerificationStatus::default();
        status.apply(&ConnectOutcome::Verified);
        status.apply(&ConnectOutcome::PresentationRejected);
        assert!(status.verified);
        assert!(status.failed);
    }

    #[test]
    fn remount_reset_starts_from_clean_flags() {
        let context = VerificationContext::new();
        context.record(&ConnectOutcome::Verified);
        assert!(context.is_verified());

        context.reset();
        assert!(!context.is_verified());
        assert!(!context.has_failed());

        context.record(&ConnectOutcome::PresentationRejected);
        assert!(context.has_failed());
        context.reset();
        assert!(!context.has_failed());
    }

    #[test]
    fn non_terminal_failures_change_nothing() {
        let mut status = VerificationStatus::default();
        status.apply(&ConnectOutcome::ProviderNotFound);
        status.apply(&ConnectOutcome::ConnectionRefused);
        status.apply(&ConnectOutcome::AccountRequestFailed("boom".to_string()));
        assert_eq!(status, VerificationStatus::default());
    }
}
