//! Site footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer style="border-top: 1px solid #374151; background: #111827; padding: 16px 0; color: #9ca3af; display: flex; flex-direction: column; align-items: center;">
            <h1 style="font-size: 20px; padding: 4px 0 8px 0;">
                <u>"Get in Touch"</u>
            </h1>
            <div style="display: flex; align-items: center; justify-content: center; gap: 12px; font-size: 14px;">
                <a target="_blank" rel="noreferrer" href="https://github.com/ragnar-dex">
                    "GitHub"
                </a>
                <a target="_blank" rel="noreferrer" href="https://www.linkedin.com/company/ragnar-dex">
                    "LinkedIn"
                </a>
                <a target="_blank" rel="noreferrer" href="https://twitter.com/ragnardex">
                    "Twitter"
                </a>
                <a href="mailto:hello@ragnar-dex.example">
                    "Email"
                </a>
            </div>
            <p style="margin-top: 16px; font-size: 13px;">
                "© 2024 Made with Love for the Concordium Ecosystem"
            </p>
        </footer>
    }
}
