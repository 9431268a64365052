//! Staff directory page: searchable, paginated table of admin accounts.

use leptos::prelude::*;

use crate::components::add_staff_modal::AddStaffModal;
use crate::components::error_panel::ErrorPanel;
use crate::components::pagination::Pagination;
use crate::net::ApiClient;
use crate::net::types::Staff;
use crate::state::pagination::{PAGE_SIZE, page_count, page_slice};
use crate::state::search;

/// Staff directory — super_admin only (enforced by the route guard).
#[component]
pub fn StaffPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let staff = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_staff().await }
        }
    });

    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);
    let show_add = RwSignal::new(false);

    // Back to the first page whenever the query changes.
    Effect::new(move || {
        let _ = query.get();
        page.set(1);
    });

    let filtered = Memo::new(move |_| {
        staff.get().map(|result| {
            result.map(|list| {
                let query = query.get();
                list.into_iter()
                    .filter(|member| search::matches(&[&member.name, &member.email], &query))
                    .collect::<Vec<_>>()
            })
        })
    });

    let total_pages = Signal::derive(move || {
        filtered
            .get()
            .and_then(Result::ok)
            .map_or(0, |list| page_count(list.len(), PAGE_SIZE))
    });

    let on_close = Callback::new(move |()| show_add.set(false));
    let on_added = Callback::new(move |()| staff.refetch());
    let on_retry = Callback::new(move |()| staff.refetch());

    view! {
        <div class="staff-page">
            <header class="page-header">
                <div>
                    <h1>"Staff Directory"</h1>
                    <p class="page-subtitle">"Manage team member accounts and permissions."</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Staff"
                </button>
            </header>

            <input
                class="search-input"
                type="text"
                placeholder="Search staff by name or email..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            {move || match filtered.get() {
                None => view! {
                    <p class="page-loading">"Loading staff members..."</p>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <ErrorPanel message=err.to_string() on_retry=on_retry/>
                }
                .into_any(),
                Some(Ok(list)) => {
                    let rows = page_slice(&list, page.get(), PAGE_SIZE).to_vec();
                    view! {
                        <div class="table-panel">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Staff Member"</th>
                                        <th>"Role"</th>
                                        <th>"Branch"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if rows.is_empty() {
                                        view! {
                                            <tr>
                                                <td class="data-table__empty" colspan="3">
                                                    "No staff members found."
                                                </td>
                                            </tr>
                                        }
                                        .into_any()
                                    } else {
                                        rows.into_iter()
                                            .map(|member| view! { <StaffRow member=member/> })
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}

            <Pagination current_page=page total_pages=total_pages/>

            <Show when=move || show_add.get()>
                <AddStaffModal on_close=on_close on_added=on_added/>
            </Show>
        </div>
    }
}

/// One staff table row.
#[component]
fn StaffRow(member: Staff) -> impl IntoView {
    view! {
        <tr>
            <td>
                <div class="data-table__person">
                    <span class="data-table__name">{member.name.clone()}</span>
                    <span class="data-table__email">{member.email.clone()}</span>
                </div>
            </td>
            <td class="data-table__role">{member.role.clone()}</td>
            <td>
                <span class="data-table__branch">{member.branch.clone()}</span>
            </td>
        </tr>
    }
}
