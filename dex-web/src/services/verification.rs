//! Wallet connect and age-verification flow
//!
//! The one piece of sequencing logic in the app: locate the wallet
//! extension, obtain an account, then request a verifiable presentation
//! proving the minimum-age statement. Written as linear awaits so the
//! state machine is visible in the control flow. There are no retries;
//! every terminal outcome needs a fresh Connect click.

use crate::services::statement::age_statement;
use crate::services::wallet::WalletApi;
use crate::utils::constants::{MIN_AGE_YEARS, VERIFICATION_CHALLENGE};
use crate::utils::format::truncate_address;

/// Terminal result of one connect attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// No wallet extension present.
    ProviderNotFound,
    /// User or environment refused the connection.
    ConnectionRefused,
    /// `requestAccounts` threw before a presentation could be requested.
    AccountRequestFailed(String),
    /// Presentation produced; the user proved the age statement.
    Verified,
    /// The wallet rejected the presentation request.
    PresentationRejected,
}

impl ConnectOutcome {
    /// Alert text for the failure branches that notify the user directly.
    /// Verification results surface through [`VerificationStatus`] instead.
    ///
    /// [`VerificationStatus`]: crate::state::verification::VerificationStatus
    pub fn user_notice(&self) -> Option<&'static str> {
        match self {
            ConnectOutcome::ProviderNotFound => Some("Please download Concordium Wallet"),
            ConnectOutcome::ConnectionRefused => Some("Please allow wallet connection"),
            ConnectOutcome::AccountRequestFailed(_) => Some("Please connect"),
            ConnectOutcome::Verified | ConnectOutcome::PresentationRejected => None,
        }
    }
}

/// Full connect sequence against an already-located provider (or `None`
/// when detection failed). A remembered account short-circuits the connect
/// prompt; otherwise a new connection is requested.
pub async fn connect_and_verify<W: WalletApi>(provider: Option<W>) -> ConnectOutcome {
    let Some(wallet) = provider else {
        return ConnectOutcome::ProviderNotFound;
    };

    let account = match wallet.get_most_recently_selected_account().await {
        Ok(Some(account)) => account,
        Ok(None) => match wallet.connect().await {
            Ok(account) => account,
            Err(_) => return ConnectOutcome::ConnectionRefused,
        },
        Err(_) => return ConnectOutcome::ConnectionRefused,
    };

    log::info!("wallet connected: {}", truncate_address(&account));
    verify_user(&wallet).await
}

/// Request account access, build the age statement and ask for a
/// verifiable presentation.
pub async fn verify_user<W: WalletApi>(wallet: &W) -> ConnectOutcome {
    if let Err(e) = wallet.request_accounts().await {
        return ConnectOutcome::AccountRequestFailed(e);
    }

    let statement = age_statement(MIN_AGE_YEARS);
    match wallet
        .request_verifiable_presentation(VERIFICATION_CHALLENGE, &statement)
        .await
    {
        Ok(()) => ConnectOutcome::Verified,
        Err(_) => ConnectOutcome::PresentationRejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::statement::{AtomicStatement, CredentialStatement, ATTRIBUTE_DOB, MIN_DATE};
    use crate::state::verification::VerificationStatus;
    use crate::utils::constants::IDENTITY_PROVIDERS;
    use std::cell::RefCell;

    /// In-memory wallet recording every call it receives.
    struct MockWallet {
        recent_account: Option<String>,
        connect_result: Result<String, String>,
        accounts_result: Result<Vec<String>, String>,
        presentation_result: Result<(), String>,
        calls: RefCell<Vec<&'static str>>,
        presentation_request: RefCell<Option<(String, Vec<CredentialStatement>)>>,
    }

    impl MockWallet {
        fn happy() -> Self {
            Self {
                recent_account: Some("4phD1qWSHZCZ2N6mP6seVnyi4DNDgMRXSG1nWyLYkP8z".to_string()),
                connect_result: Ok("4phD1qWSHZCZ2N6mP6seVnyi4DNDgMRXSG1nWyLYkP8z".to_string()),
                accounts_result: Ok(vec!["4phD1qWSHZCZ2N6mP6seVnyi4DNDgMRXSG1nWyLYkP8z".to_string()]),
                presentation_result: Ok(()),
                calls: RefCell::new(Vec::new()),
                presentation_request: RefCell::new(None),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl WalletApi for &MockWallet {
        async fn get_most_recently_selected_account(&self) -> Result<Option<String>, String> {
            self.calls.borrow_mut().push("recent");
            Ok(self.recent_account.clone())
        }

        async fn connect(&self) -> Result<String, String> {
            self.calls.borrow_mut().push("connect");
            self.connect_result.clone()
        }

        async fn request_accounts(&self) -> Result<Vec<String>, String> {
            self.calls.borrow_mut().push("request_accounts");
            self.accounts_result.clone()
        }

        async fn request_verifiable_presentation(
            &self,
            challenge: &str,
            statement: &[CredentialStatement],
        ) -> Result<(), String> {
            self.calls.borrow_mut().push("presentation");
            *self.presentation_request.borrow_mut() =
                Some((challenge.to_string(), statement.to_vec()));
            self.presentation_result.clone()
        }
    }

    #[tokio::test]
    async fn missing_provider_touches_nothing() {
        let outcome = connect_and_verify(None::<&MockWallet>).await;
        assert_eq!(outcome, ConnectOutcome::ProviderNotFound);
        assert_eq!(outcome.user_notice(), Some("Please download Concordium Wallet"));

        let mut status = VerificationStatus::default();
        status.apply(&outcome);
        assert!(!status.verified);
        assert!(!status.failed);
    }

    #[tokio::test]
    async fn remembered_account_skips_connect_prompt() {
        let wallet = MockWallet::happy();
        let outcome = connect_and_verify(Some(&wallet)).await;
        assert_eq!(outcome, ConnectOutcome::Verified);
        assert_eq!(wallet.calls(), vec!["recent", "request_accounts", "presentation"]);
    }

    #[tokio::test]
    async fn connects_when_no_account_is_remembered() {
        let wallet = MockWallet {
            recent_account: None,
            ..MockWallet::happy()
        };
        let outcome = connect_and_verify(Some(&wallet)).await;
        assert_eq!(outcome, ConnectOutcome::Verified);
        assert_eq!(
            wallet.calls(),
            vec!["recent", "connect", "request_accounts", "presentation"]
        );
    }

    #[tokio::test]
    async fn refused_connection_leaves_status_untouched() {
        let wallet = MockWallet {
            recent_account: None,
            connect_result: Err("user rejected".to_string()),
            ..MockWallet::happy()
        };
        let outcome = connect_and_verify(Some(&wallet)).await;
        assert_eq!(outcome, ConnectOutcome::ConnectionRefused);
        assert_eq!(outcome.user_notice(), Some("Please allow wallet connection"));
        // No presentation was attempted.
        assert_eq!(wallet.calls(), vec!["recent", "connect"]);

        let mut status = VerificationStatus::default();
        status.apply(&outcome);
        assert_eq!(status, VerificationStatus::default());
    }

    #[tokio::test]
    async fn successful_presentation_verifies() {
        let wallet = MockWallet::happy();
        let outcome = connect_and_verify(Some(&wallet)).await;

        let mut status = VerificationStatus::default();
        status.apply(&outcome);
        assert!(status.verified);
        assert!(!status.failed);
    }

    #[tokio::test]
    async fn rejected_presentation_sets_failed_only() {
        let wallet = MockWallet {
            presentation_result: Err("user declined".to_string()),
            ..MockWallet::happy()
        };
        let outcome = connect_and_verify(Some(&wallet)).await;
        assert_eq!(outcome, ConnectOutcome::PresentationRejected);
        assert_eq!(outcome.user_notice(), None);

        let mut status = VerificationStatus::default();
        status.apply(&outcome);
        assert!(status.failed);
        assert!(!status.verified);
    }

    #[tokio::test]
    async fn account_request_failure_is_swallowed() {
        let wallet = MockWallet {
            accounts_result: Err("wallet locked".to_string()),
            ..MockWallet::happy()
        };
        let outcome = connect_and_verify(Some(&wallet)).await;
        assert_eq!(
            outcome,
            ConnectOutcome::AccountRequestFailed("wallet locked".to_string())
        );
        assert_eq!(outcome.user_notice(), Some("Please connect"));
        assert_eq!(wallet.calls(), vec!["recent", "request_accounts"]);

        let mut status = VerificationStatus::default();
        status.apply(&outcome);
        assert_eq!(status, VerificationStatus::default());
    }

    #[tokio::test]
    async fn repeat_attempt_after_success_runs_full_sequence() {
        let wallet = MockWallet::happy();
        let mut status = VerificationStatus::default();

        let first = connect_and_verify(Some(&wallet)).await;
        status.apply(&first);
        let second = connect_and_verify(Some(&wallet)).await;
        status.apply(&second);

        assert_eq!(second, ConnectOutcome::Verified);
        assert!(status.verified);
        assert_eq!(
            wallet.calls(),
            vec![
                "recent",
                "request_accounts",
                "presentation",
                "recent",
                "request_accounts",
                "presentation"
            ]
        );
    }

    #[tokio::test]
    async fn presentation_request_carries_challenge_and_statement() {
        let wallet = MockWallet::happy();
        connect_and_verify(Some(&wallet)).await;

        let request = wallet.presentation_request.borrow();
        let (challenge, statement) = request.as_ref().unwrap();
        assert_eq!(challenge.len(), 64);
        assert!(challenge.chars().all(|c| c == 'B'));

        assert_eq!(statement.len(), 1);
        assert_eq!(statement[0].id_qualifier.issuers, IDENTITY_PROVIDERS.to_vec());
        match &statement[0].statement[0] {
            AtomicStatement::AttributeInRange {
                attribute_tag,
                lower,
                upper,
            } => {
                assert_eq!(attribute_tag, ATTRIBUTE_DOB);
                assert_eq!(lower, MIN_DATE);
                // Upper bound is a YYYYMMDD date in the past.
                assert_eq!(upper.len(), 8);
                assert!(upper.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
