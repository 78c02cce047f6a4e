//! Dismissible notification banner for the exchange panel

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient notification shown above the trade button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn Alert(notice: Notice, on_close: Callback<()>) -> impl IntoView {
    let (background, color) = match notice.kind {
        NoticeKind::Success => ("#dcfce7", "#166534"),
        NoticeKind::Error => ("#fee2e2", "#991b1b"),
    };

    view! {
        <div
            class="alert"
            style=format!(
                "display: flex; align-items: center; border-radius: 6px; padding: 16px; \
                 margin-top: 16px; background: {}; color: {};",
                background, color
            )
        >
            <p style="flex: 1; font-size: 14px; font-weight: 500; margin: 0;">
                {notice.message}
            </p>
            <button
                style="background: none; border: none; cursor: pointer; font-size: 16px; color: inherit;"
                on:click=move |_| on_close.run(())
            >
                "✕"
            </button>
        </div>
    }
}
