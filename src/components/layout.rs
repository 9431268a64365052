//! Application shell around the guarded pages.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

/// Sidebar plus main content area.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <main class="layout__main">
                <div class="layout__content">{children()}</div>
            </main>
        </div>
    }
}
