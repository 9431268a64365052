//! Dashboard page with overview stat cards.

use leptos::prelude::*;

use crate::net::ApiClient;
use crate::session::Session;

/// Landing page after login: branch/staff counts from the branch list, plus
/// a welcome line for the signed-in user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();

    let branches = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_branches().await }
        }
    });

    let user_name = move || {
        session
            .state
            .get()
            .user
            .map_or_else(|| "there".to_owned(), |user| user.name)
    };

    let branch_count = move || {
        branches
            .get()
            .and_then(Result::ok)
            .map_or_else(|| "-".to_owned(), |list| list.len().to_string())
    };
    let staff_count = move || {
        branches
            .get()
            .and_then(Result::ok)
            .map_or_else(
                || "-".to_owned(),
                |list| list.iter().map(|b| b.staff_count).sum::<u64>().to_string(),
            )
    };

    view! {
        <div class="dashboard-page">
            <header>
                <h1>"Dashboard Overview"</h1>
                <p class="page-subtitle">
                    {move || format!("Welcome back, {}! Here's what's happening at SB GmbH.", user_name())}
                </p>
            </header>

            <div class="stat-grid">
                <div class="stat-card">
                    <p class="stat-card__title">"Branches"</p>
                    <p class="stat-card__value">{branch_count}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__title">"Total Staff"</p>
                    <p class="stat-card__value">{staff_count}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__title">"Active Staff"</p>
                    <p class="stat-card__value">"-"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__title">"Avg Shift"</p>
                    <p class="stat-card__value">"-"</p>
                </div>
            </div>

            <div class="panel">
                <h2>"Recent Activity"</h2>
                <p class="panel__empty">"Activity tracking is not wired up yet."</p>
            </div>
        </div>
    }
}
