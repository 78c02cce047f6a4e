//! Exchange page: the token trading panel
//!
//! Market data and trades go through the [`DexClient`] seam; this proof of
//! concept wires in [`MockDex`], which resolves fixed values.

use leptos::prelude::*;

use crate::components::{Alert, Notice};
use crate::services::dex::{DexClient, MockDex};
use crate::utils::format::{format_ccd, format_number};

/// Accepts positive finite numbers only; the mocks would happily "trade"
/// anything else.
fn parse_amount(input: &str) -> Option<f64> {
    let value = input.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[component]
pub fn ExchangePage() -> impl IntoView {
    let dex = MockDex;

    let (token_price, set_token_price) = signal(0.0f64);
    let (liquidity, set_liquidity) = signal(0u64);
    let (amount, set_amount) = signal(String::new());
    let (buying, set_buying) = signal(true);
    let (notification, set_notification) = signal(None::<Notice>);

    // Fetch market data once on mount.
    leptos::task::spawn_local(async move {
        match dex.token_price().await {
            Ok(price) => set_token_price.set(price),
            Err(e) => log::error!("failed to fetch token price: {}", e),
        }
        match dex.contract_liquidity().await {
            Ok(tokens) => set_liquidity.set(tokens),
            Err(e) => log::error!("failed to fetch liquidity: {}", e),
        }
    });

    let on_toggle = move |_| set_buying.update(|b| *b = !*b);

    let on_trade = move |_| {
        let Some(value) = parse_amount(&amount.get_untracked()) else {
            set_notification.set(Some(Notice::error("Enter a valid amount")));
            return;
        };

        leptos::task::spawn_local(async move {
            let result = if buying.get_untracked() {
                dex.buy_tokens(value).await
            } else {
                dex.sell_tokens(value).await
            };

            match result {
                Ok(receipt) => {
                    set_notification.set(Some(Notice::success(receipt.message)));
                    set_amount.set(String::new());
                }
                Err(e) => set_notification.set(Some(Notice::error(e))),
            }
        });
    };

    let on_close = Callback::new(move |_: ()| set_notification.set(None));

    view! {
        <div style="max-width: 440px; margin: 40px auto 0 auto; padding: 24px; background: #ffffff; border-radius: 8px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);">
            <h2 style="font-size: 24px; font-weight: 700; margin-bottom: 24px; text-align: center;">
                "Ragnar DEX"
            </h2>

            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                <span style="font-weight: 600;">"Token Price:"</span>
                <span>{move || format_ccd(token_price.get())}</span>
            </div>

            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                <span style="font-weight: 600;">"Contract Liquidity:"</span>
                <span>{move || format!("{} Tokens", format_number(liquidity.get() as f64, 0))}</span>
            </div>

            <div style="margin-bottom: 16px;">
                <label for="amount" style="display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 8px;">
                    {move || if buying.get() { "Amount of CCD to spend" } else { "Amount of Tokens to sell" }}
                </label>
                <input
                    type="number"
                    id="amount"
                    placeholder="Enter amount"
                    style="width: 100%; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px; box-sizing: border-box;"
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </div>

            <button
                style="width: 100%; margin-bottom: 16px; padding: 8px 16px; background: #e5e7eb; color: #1f2937; border: none; border-radius: 6px; cursor: pointer;"
                on:click=on_toggle
            >
                {move || if buying.get() { "⇄ Switch to Sell" } else { "⇄ Switch to Buy" }}
            </button>

            <button
                style="width: 100%; padding: 8px 16px; background: #2563eb; color: #ffffff; border: none; border-radius: 6px; cursor: pointer;"
                on:click=on_trade
            >
                {move || if buying.get() { "Buy Tokens" } else { "Sell Tokens" }}
            </button>

            {move || notification.get().map(|notice| view! {
                <Alert notice=notice on_close=on_close/>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn accepts_positive_numbers() {
        assert_eq!(parse_amount("50"), Some(50.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
    }

    #[test]
    fn rejects_garbage_and_non_positive() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }
}
