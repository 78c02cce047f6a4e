//! Concordium Browser Wallet integration via wasm-bindgen
//!
//! JavaScript interop for the wallet extension injected at
//! `window.concordium`. Everything the rest of the crate needs from the
//! extension goes through [`WalletApi`], so the verification flow can be
//! driven by an in-memory wallet in tests.

use wasm_bindgen::prelude::*;

use crate::services::statement::CredentialStatement;
use crate::utils::constants::PROVIDER_DETECT_TIMEOUT_MS;

/// The wallet capability the verification flow sequences calls against.
///
/// [`BrowserWallet`] is the real implementation; tests substitute mocks.
#[allow(async_fn_in_trait)]
pub trait WalletApi {
    /// Account the user selected most recently, if the wallet remembers one.
    async fn get_most_recently_selected_account(&self) -> Result<Option<String>, String>;

    /// Prompt the user to connect and return the selected account address.
    async fn connect(&self) -> Result<String, String>;

    /// Request access to the wallet's accounts (may prompt the user).
    async fn request_accounts(&self) -> Result<Vec<String>, String>;

    /// Ask the wallet to produce a verifiable presentation for `statement`
    /// bound to `challenge`.
    async fn request_verifiable_presentation(
        &self,
        challenge: &str,
        statement: &[CredentialStatement],
    ) -> Result<(), String>;
}

// ============================================================================
// PROVIDER DETECTION AND CALLS (JavaScript interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasConcordiumProvider() {
    return typeof window.concordium !== 'undefined';
}

export async function walletMostRecentAccount() {
    const account = await window.concordium.getMostRecentlySelectedAccount();
    return account ?? null;
}

export async function walletConnect() {
    return await window.concordium.connect();
}

export async function walletRequestAccounts() {
    return await window.concordium.requestAccounts();
}

export async function walletRequestPresentation(challenge, statement) {
    return await window.concordium.requestVerifiablePresentation(challenge, statement);
}

export function walletSubscribe(event, callback) {
    if (window.concordium && typeof window.concordium.on === 'function') {
        window.concordium.on(event, callback);
    }
}
")]
extern "C" {
    /// Check if the wallet extension has injected its provider
    fn hasConcordiumProvider() -> bool;

    /// Most recently selected account, or null
    #[wasm_bindgen(catch)]
    async fn walletMostRecentAccount() -> Result<JsValue, JsValue>;

    /// Connect and return the selected account address
    #[wasm_bindgen(catch)]
    async fn walletConnect() -> Result<JsValue, JsValue>;

    /// Request account access (array of address strings)
    #[wasm_bindgen(catch)]
    async fn walletRequestAccounts() -> Result<JsValue, JsValue>;

    /// Request a verifiable presentation for a statement
    #[wasm_bindgen(catch)]
    async fn walletRequestPresentation(
        challenge: &str,
        statement: &JsValue,
    ) -> Result<JsValue, JsValue>;

    /// Register a provider event listener
    fn walletSubscribe(event: &str, callback: &js_sys::Function);
}

/// Flatten a JS error into a displayable string.
fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("wallet error: {:?}", value))
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Handle to the injected `window.concordium` provider.
#[derive(Clone, Copy, Debug)]
pub struct BrowserWallet;

/// Locate the wallet extension, waiting briefly for it to initialize. The
/// extension injects `window.concordium` after page load, so a single
/// synchronous check right after a click can race it.
pub async fn detect_provider() -> Option<BrowserWallet> {
    const POLL_INTERVAL_MS: u32 = 100;

    let mut waited = 0;
    while !hasConcordiumProvider() {
        if waited >= PROVIDER_DETECT_TIMEOUT_MS {
            log::error!("could not find provider");
            return None;
        }
        gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
        waited += POLL_INTERVAL_MS;
    }
    Some(BrowserWallet)
}

impl WalletApi for BrowserWallet {
    async fn get_most_recently_selected_account(&self) -> Result<Option<String>, String> {
        let value = walletMostRecentAccount().await.map_err(js_error)?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            Ok(value.as_string())
        }
    }

    async fn connect(&self) -> Result<String, String> {
        let value = walletConnect().await.map_err(js_error)?;
        value
            .as_string()
            .ok_or_else(|| "connected account is not an address string".to_string())
    }

    async fn request_accounts(&self) -> Result<Vec<String>, String> {
        let value = walletRequestAccounts().await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    async fn request_verifiable_presentation(
        &self,
        challenge: &str,
        statement: &[CredentialStatement],
    ) -> Result<(), String> {
        let statement = serde_wasm_bindgen::to_value(statement).map_err(|e| e.to_string())?;
        walletRequestPresentation(challenge, &statement)
            .await
            .map_err(js_error)?;
        Ok(())
    }
}

/// Register logging listeners for account/chain change events. The handlers
/// intentionally only log; the view resets nothing on these events.
pub fn subscribe_provider_events() {
    for event in ["accountChanged", "accountDisconnected", "chainChanged"] {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            log::info!("wallet event {}: {:?}", event, value);
        });
        walletSubscribe(event, callback.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        callback.forget();
    }
}
