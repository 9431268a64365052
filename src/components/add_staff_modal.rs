//! Modal dialog for registering a staff (admin) account.

use leptos::prelude::*;

use crate::net::ApiClient;

/// Staff registration form. The branch select is populated from
/// `GET /branch` when the modal mounts; the role is fixed to `admin` by the
/// API client. On success the parent refetches the staff list wholesale.
#[component]
pub fn AddStaffModal(on_close: Callback<()>, on_added: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let branch_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let branches = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_branches().await }
        }
    });

    let submit = Callback::new(move |_| {
        if email.get().trim().is_empty() || password.get().is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }

        let api = api.clone();
        saving.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = api
                .register_staff(
                    first_name.get_untracked().trim(),
                    last_name.get_untracked().trim(),
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                    branch_id.get_untracked().trim(),
                )
                .await;
            match result {
                Ok(()) => {
                    saving.set(false);
                    on_added.run(());
                    on_close.run(());
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Staff"</h2>

                <Show when=move || error.get().is_some()>
                    <div class="dialog__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="dialog__row">
                    <label class="dialog__label">
                        "First Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Last Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Branch"
                    <select
                        class="dialog__input"
                        on:change=move |ev| branch_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a branch"</option>
                        {move || {
                            branches.get().map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|branch| {
                                        view! {
                                            <option value=branch.id.clone()>{branch.name}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any(),
                                Err(_) => view! {
                                    <option disabled=true>"Failed to load branches"</option>
                                }
                                .into_any(),
                            })
                        }}
                    </select>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if saving.get() { "Saving..." } else { "Add Staff" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
