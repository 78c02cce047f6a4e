//! Ragnar DEX web app: route table and layout shell

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::{ExchangePage, HomePage, LandingPage};
use crate::state::verification::provide_verification_context;

#[component]
pub fn App() -> impl IntoView {
    provide_verification_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/home") view=HomePage/>
                    <Route path=path!("/exchange") view=ExchangePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: center; align-items: center; min-height: 100vh; background: #111827;">
            <div style="max-width: 500px; text-align: center; color: #ffffff;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #9ca3af; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span style="display: inline-block; background: #dc2626; color: #ffffff; padding: 12px 24px; border-radius: 6px;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
