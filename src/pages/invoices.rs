//! Invoices page: per-branch review queue with approve/reject actions.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::pagination::Pagination;
use crate::net::ApiClient;
use crate::net::types::{Invoice, InvoiceStatus};
use crate::session::Session;
use crate::state::invoices::{apply_status, pending_count};
use crate::state::pagination::{PAGE_SIZE, page_count, page_slice};

/// Invoice review for the session's branch.
///
/// The fetched list lives in a local signal so a server-acknowledged
/// approve/reject can patch the one row in place instead of refetching.
#[component]
pub fn InvoicesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();

    let branch_id = session
        .state
        .get_untracked()
        .user
        .and_then(|user| user.branch_id);

    let fetched = LocalResource::new({
        let api = api.clone();
        let branch_id = branch_id.clone();
        move || {
            let api = api.clone();
            let branch_id = branch_id.clone();
            async move {
                match branch_id {
                    Some(id) => api.fetch_invoices(&id).await,
                    None => Ok(Vec::new()),
                }
            }
        }
    });

    let rows = RwSignal::new(Vec::<Invoice>::new());
    let page = RwSignal::new(1_usize);
    // Invoice id of the in-flight status call, to disable its buttons.
    let busy = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(Ok(list)) = fetched.get() {
            rows.set(list);
        }
    });

    let on_review = {
        let api = api.clone();
        Callback::new(move |(id, status): (String, InvoiceStatus)| {
            if busy.get_untracked().is_some() {
                return;
            }
            busy.set(Some(id.clone()));
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = match status {
                    InvoiceStatus::Approved => api.approve_invoice(&id).await,
                    InvoiceStatus::Rejected => api.reject_invoice(&id).await,
                    InvoiceStatus::Pending => Ok(()),
                };
                match result {
                    Ok(()) => rows.update(|list| apply_status(list, &id, status)),
                    Err(err) => log::error!("invoice status update failed: {err}"),
                }
                busy.set(None);
            });
        })
    };

    let total_pages = Signal::derive(move || page_count(rows.get().len(), PAGE_SIZE));
    let pending = move || pending_count(&rows.get());
    let on_retry = Callback::new(move |()| fetched.refetch());

    view! {
        <div class="invoices-page">
            <header class="page-header">
                <div>
                    <h1>"Invoice Verification"</h1>
                    <p class="page-subtitle">"Review business invoices for processing."</p>
                </div>
                <div class="page-header__stat">
                    <span class="page-header__stat-label">"Pending"</span>
                    <span class="page-header__stat-value">{pending}</span>
                </div>
            </header>

            {move || match fetched.get() {
                None => view! {
                    <p class="page-loading">"Loading invoices..."</p>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <ErrorPanel message=err.to_string() on_retry=on_retry/>
                }
                .into_any(),
                Some(Ok(_)) => {
                    let visible = page_slice(&rows.get(), page.get(), PAGE_SIZE).to_vec();
                    view! {
                        <div class="table-panel">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Invoice"</th>
                                        <th>"Customer"</th>
                                        <th>"Date"</th>
                                        <th>"Total"</th>
                                        <th>"Status"</th>
                                        <th class="data-table__actions">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if visible.is_empty() {
                                        view! {
                                            <tr>
                                                <td class="data-table__empty" colspan="6">
                                                    "No invoices found for this branch."
                                                </td>
                                            </tr>
                                        }
                                        .into_any()
                                    } else {
                                        visible
                                            .into_iter()
                                            .map(|invoice| view! {
                                                <InvoiceRow
                                                    invoice=invoice
                                                    busy=busy
                                                    on_review=on_review
                                                />
                                            })
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
        </div>
    }
}

/// One invoice row with its review actions.
#[component]
fn InvoiceRow(
    invoice: Invoice,
    busy: RwSignal<Option<String>>,
    on_review: Callback<(String, InvoiceStatus)>,
) -> impl IntoView {
    let id = invoice.id.clone();
    let is_busy = {
        let id = id.clone();
        move || busy.get().as_deref() == Some(id.as_str())
    };
    let approve = {
        let id = id.clone();
        move |_| on_review.run((id.clone(), InvoiceStatus::Approved))
    };
    let reject = {
        let id = id.clone();
        move |_| on_review.run((id.clone(), InvoiceStatus::Rejected))
    };

    let status_class = match invoice.status {
        InvoiceStatus::Pending => "status-badge status-badge--pending",
        InvoiceStatus::Approved => "status-badge status-badge--approved",
        InvoiceStatus::Rejected => "status-badge status-badge--rejected",
    };

    view! {
        <tr>
            <td class="data-table__id">{invoice.id.clone()}</td>
            <td>{invoice.customer_name.clone()}</td>
            <td>{invoice.date.clone()}</td>
            <td class="data-table__amount">{format!("{:.2}", invoice.total)}</td>
            <td>
                <span class=status_class>{invoice.status.label()}</span>
            </td>
            <td class="data-table__actions">
                <Show when={
                    let status = invoice.status;
                    move || status == InvoiceStatus::Pending
                }>
                    <button
                        class="btn btn--approve"
                        disabled=is_busy.clone()
                        on:click=approve.clone()
                    >
                        "Approve"
                    </button>
                    <button
                        class="btn btn--reject"
                        disabled=is_busy.clone()
                        on:click=reject.clone()
                    >
                        "Reject"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
