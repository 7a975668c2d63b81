use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// A dismissible user-visible notice. Every recovered error ends up here;
/// nothing in the app is allowed to crash the page.
#[derive(Clone)]
pub struct Notice {
    pub intent: MessageBarIntent,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            intent: MessageBarIntent::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            intent: MessageBarIntent::Success,
            text: text.into(),
        }
    }
}

#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|Notice { intent, text }| view! {
            <div class="notice-bar">
                <MessageBar intent=intent>
                    {text}
                </MessageBar>
                <button class="notice-dismiss" on:click=move |_| notice.set(None)>
                    "✕"
                </button>
            </div>
        })}
    }
}
