//! Quick action card

use intervu_core::QuickAction;
use leptos::prelude::*;

/// Clickable card for one quick action
#[component]
pub fn ActionCard<F>(action: QuickAction, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            type="button"
            class=format!("action-card {}", action.color.css_class())
            on:click=move |_| on_click()
        >
            <span class="action-icon">{action.icon}</span>
            <h3 class="action-title">{action.title}</h3>
            <p class="action-description">{action.description}</p>
        </button>
    }
}
