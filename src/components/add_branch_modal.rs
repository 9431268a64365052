//! Modal dialog for creating a branch location.

use leptos::prelude::*;

use crate::net::ApiClient;

/// Branch creation form: name, address, optional logo file. Submits as
/// multipart; on success the parent refetches the branch list wholesale.
#[component]
pub fn AddBranchModal(on_close: Callback<()>, on_added: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let logo_input = NodeRef::<leptos::html::Input>::new();

    let submit = Callback::new(move |_| {
        let branch_name = name.get();
        if branch_name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let branch_name = branch_name.trim().to_owned();
            let branch_address = address.get().trim().to_owned();
            let logo = logo_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            saving.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api
                    .create_branch(&branch_name, &branch_address, logo.as_ref())
                    .await
                {
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
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &branch_name);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Branch"</h2>

                <Show when=move || error.get().is_some()>
                    <div class="dialog__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <label class="dialog__label">
                    "Branch Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Address"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Logo (optional)"
                    <input class="dialog__input" type="file" accept="image/*" node_ref=logo_input/>
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
                        {move || if saving.get() { "Saving..." } else { "Create Branch" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
