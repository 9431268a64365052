//! Inline error panel with a user-initiated retry.

use leptos::prelude::*;

/// Shown in place of a list when its fetch failed. The retry callback
/// re-issues the same fetch; nothing retries automatically.
#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <p class="error-panel__message">{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
