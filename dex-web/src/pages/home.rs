//! Home page: project pitch, about section and how-it-works steps

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Footer;
use crate::utils::constants::ROUTE_LANDING;

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "Connect",
        "Connect the Concordium browser wallet and allow the site to read your selected account.",
    ),
    (
        "Verify",
        "Approve a verifiable presentation proving you are at least 18, without revealing your date of birth.",
    ),
    (
        "Trade",
        "Buy and sell CIS-2 tokens against the exchange contract directly from your wallet.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section style="background: #111827; color: #ffffff;">
            <div style="min-height: 70vh; display: flex; flex-wrap: wrap; align-items: center; justify-content: center; padding: 64px 16px; background: linear-gradient(to top right, #0d1321, #0d1321, #450a0a);">
                <div style="max-width: 520px; padding: 0 16px;">
                    <div style="font-size: 40px; font-weight: 500; color: #d1d5db;">
                        <p>"Decentralized"</p>
                        <p>
                            <span style="color: #991b1b;">"Exchange"</span>
                            " on "
                            <span style="color: #991b1b;">"Concordium"</span>
                        </p>
                    </div>
                    <p style="color: #d1d5db; margin: 16px 0 24px 0; line-height: 1.6;">
                        "This project showcases a proof-of-concept decentralized exchange \
                         on the Concordium blockchain, built to refine DEX strategies \
                         with CIS-2 tokens."
                    </p>
                    <A href=ROUTE_LANDING>
                        <span style="display: inline-flex; align-items: center; gap: 8px; background: #991b1b; border-radius: 9999px; padding: 12px 32px; color: #ffffff;">
                            "Connect Wallet"
                        </span>
                    </A>
                </div>
                <div>
                    <img src="/animation.png" alt="" style="max-width: 420px; width: 100%; object-fit: cover;"/>
                </div>
            </div>

            <div style="padding: 32px 0; display: flex; flex-direction: column; align-items: center;">
                <h1 style="font-size: 40px; color: #9ca3af; padding-bottom: 20px; text-align: center;">
                    "About the App"
                </h1>
                <p style="width: 70%; color: #9ca3af; font-size: 15px; text-align: center; line-height: 1.7;">
                    "The application functions as a decentralized exchange, offering a \
                     platform for users to trade digital assets without a central \
                     authority or intermediary. It leverages a peer-to-peer network, \
                     allowing participants to facilitate trades directly, with secure, \
                     transparent and trustless transactions maintained by the network's \
                     participants."
                </p>
            </div>

            <div style="padding: 32px 0 48px 0;">
                <h1 style="font-size: 40px; color: #9ca3af; text-align: center; margin-bottom: 24px;">
                    "How It Works"
                </h1>
                <ol style="max-width: 640px; margin: 0 auto; color: #d1d5db; display: flex; flex-direction: column; gap: 16px; list-style: none; padding: 0 16px;">
                    {HOW_IT_WORKS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, body))| view! {
                            <li style="display: flex; gap: 16px; align-items: baseline;">
                                <span style="background: #991b1b; color: #ffffff; border-radius: 9999px; min-width: 28px; height: 28px; display: inline-flex; align-items: center; justify-content: center;">
                                    {i + 1}
                                </span>
                                <span>
                                    <strong>{title}</strong>
                                    ": "
                                    {body}
                                </span>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>

            <Footer/>
        </section>
    }
}
