//! Site header with the wallet connect action

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::ROUTE_HOME;

#[component]
pub fn Header(on_connect: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header" style="padding: 16px; display: flex; justify-content: space-between; align-items: center;">
            <div style="display: flex; align-items: center; gap: 8px;">
                <div style="width: 32px; height: 32px; background: #dc2626; border-radius: 2px;"></div>
                <span style="font-size: 20px; font-weight: 700; color: #ffffff;">
                    "RAGNAR"
                </span>
                <span style="color: #991b1b; font-weight: 500;">"DEX"</span>
                <A href=ROUTE_HOME>
                    <span style="margin-left: 16px; color: #9ca3af; font-size: 14px;">"About"</span>
                </A>
            </div>
            <button
                style="background: #dc2626; color: #ffffff; padding: 8px 16px; border: none; border-radius: 4px; cursor: pointer;"
                on:click=move |_| on_connect.run(())
            >
                "Connect Wallet"
            </button>
        </header>
    }
}
