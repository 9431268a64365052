//! Login page with the email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::{ApiClient, ApiError};
use crate::session::Session;

/// Inline message for a failed login: the server's explanation when it gave
/// one, else a generic credentials hint.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Server { message, .. } => message.clone(),
        _ => "Login failed. Please check your credentials.".to_owned(),
    }
}

/// Login page — authenticates, establishes the session, then fetches the
/// user's branch details best-effort before navigating home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Already signed in: skip the form.
    {
        let session = session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.state.get();
            if !state.loading && state.is_authenticated() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let session = session.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&email.get_untracked(), &password.get_untracked()).await {
                Ok((token, user)) => {
                    let branch_id = user.branch_id.clone();
                    session.login(&token, user);

                    // Branch details are nice-to-have; login proceeds even
                    // when this fetch fails.
                    if let Some(branch_id) = branch_id {
                        match api.fetch_branch(&branch_id).await {
                            Ok(details) => session.set_branch_details(&details),
                            Err(err) => {
                                log::warn!("branch detail fetch failed after login: {err}");
                            }
                        }
                    }

                    submitting.set(false);
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    submitting.set(false);
                    error.set(Some(login_error_message(&err)));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SB-GmbH Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage your business"</p>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="login-form__error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <label class="login-form__label">
                        "Email Address"
                        <input
                            class="login-form__input"
                            type="email"
                            placeholder="admin@sb-gmbh.com"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-form__input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        class="btn btn--primary login-form__submit"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="login-card__footer">"Reserved for SB-GmbH Authorized Staff"</p>
            </div>
        </div>
    }
}
