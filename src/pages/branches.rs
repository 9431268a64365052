//! Branches page: card grid with create modal.

use leptos::prelude::*;

use crate::components::add_branch_modal::AddBranchModal;
use crate::components::error_panel::ErrorPanel;
use crate::net::ApiClient;
use crate::net::types::Branch;

/// Branch management — one fetch on mount, wholesale refetch after a create.
#[component]
pub fn BranchesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let branches = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_branches().await }
        }
    });

    let show_add = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_add.set(false));
    let on_added = Callback::new(move |()| branches.refetch());
    let on_retry = Callback::new(move |()| branches.refetch());

    view! {
        <div class="branches-page">
            <header class="page-header">
                <div>
                    <h1>"Branches Management"</h1>
                    <p class="page-subtitle">"View and manage all SB GmbH locations."</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Branch"
                </button>
            </header>

            {move || match branches.get() {
                None => view! {
                    <p class="page-loading">"Loading branches..."</p>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <ErrorPanel message=err.to_string() on_retry=on_retry/>
                }
                .into_any(),
                Some(Ok(list)) => {
                    if list.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3>"No Branches Found"</h3>
                                <p>
                                    "Get started by creating your first branch location to manage staff and operations."
                                </p>
                                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                                    "Create First Branch"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="branch-grid">
                                {list
                                    .into_iter()
                                    .map(|branch| view! { <BranchCard branch=branch/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            <Show when=move || show_add.get()>
                <AddBranchModal on_close=on_close on_added=on_added/>
            </Show>
        </div>
    }
}

/// One branch card in the grid.
#[component]
fn BranchCard(branch: Branch) -> impl IntoView {
    view! {
        <div class="branch-card">
            <div class="branch-card__logo">
                {match &branch.logo {
                    Some(logo) => view! {
                        <img src=logo.clone() alt=branch.name.clone()/>
                    }
                    .into_any(),
                    None => view! { <span class="branch-card__placeholder">"\u{1F4CD}"</span> }
                        .into_any(),
                }}
            </div>
            <h3 class="branch-card__name">{branch.name.clone()}</h3>
            <p class="branch-card__address">{branch.address.clone()}</p>
            <div class="branch-card__footer">
                <span class="branch-card__staff">
                    {format!("{} staff members", branch.staff_count)}
                </span>
                <span class="branch-card__status">"Active"</span>
            </div>
        </div>
    }
}
