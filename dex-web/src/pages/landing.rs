//! Landing page with the wallet connect / age verification entry point

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::Header;
use crate::services::verification::{connect_and_verify, ConnectOutcome};
use crate::services::wallet::{detect_provider, subscribe_provider_events};
use crate::state::verification::use_verification_context;
use crate::utils::constants::ROUTE_EXCHANGE;

/// Browser alert, the only user-facing channel for connect failures.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let verification = use_verification_context();
    // Each mount is a fresh attempt: stale flags from an earlier visit must
    // neither redirect back to the exchange nor show the failure banner.
    verification.reset();

    let navigate = use_navigate();

    // Redirect to the exchange once verification succeeds. The flag only
    // ever transitions false -> true within a mount, so this navigates
    // exactly once.
    Effect::new(move || {
        if verification.is_verified() {
            navigate(ROUTE_EXCHANGE, Default::default());
        }
    });

    let on_connect = Callback::new(move |_: ()| {
        leptos::task::spawn_local(async move {
            let provider = detect_provider().await;
            if provider.is_some() {
                subscribe_provider_events();
            }

            let outcome = connect_and_verify(provider).await;
            if let ConnectOutcome::AccountRequestFailed(error) = &outcome {
                log::error!("account request failed: {}", error);
            }

            verification.record(&outcome);
            if let Some(notice) = outcome.user_notice() {
                alert(notice);
            }
        });
    });

    view! {
        <div style="min-height: 100vh; background: #111827; color: #ffffff;">
            <Header on_connect=on_connect/>

            <main style="max-width: 1100px; margin: 0 auto; padding: 64px 16px 0 16px; display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between;">
                <div style="max-width: 520px;">
                    <h1 style="font-size: 44px; font-weight: 700; margin-bottom: 16px; line-height: 1.2;">
                        "Decentralized"
                        <br/>
                        <span style="color: #dc2626;">"Lending"</span>
                        " And "
                        <span style="color: #dc2626;">"Borrowing"</span>
                    </h1>
                    <p style="color: #9ca3af; margin-bottom: 32px;">
                        "A proof-of-concept decentralized exchange on the Concordium \
                         blockchain. Connect your wallet and prove you are of age to \
                         start trading."
                    </p>

                    {move || verification.has_failed().then(|| view! {
                        <div style="background: #7f1d1d; color: #fecaca; border-radius: 6px; padding: 12px 16px; margin-bottom: 24px;">
                            "Age verification failed. You must prove you are 18 or older to use the exchange."
                        </div>
                    })}

                    <button
                        style="background: #dc2626; color: #ffffff; padding: 12px 24px; border: none; border-radius: 9999px; cursor: pointer; display: flex; align-items: center;"
                        on:click=move |_| on_connect.run(())
                    >
                        "Go to Dashboard " <span style="margin-left: 8px;">"→"</span>
                    </button>
                </div>

                <div style="margin-top: 32px;">
                    <img src="/animation.png" alt="DeFi Illustration" style="max-width: 420px; width: 100%;"/>
                </div>
            </main>
        </div>
    }
}
