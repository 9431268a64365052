//! Route guard deciding whether a navigation target may render for the
//! current session.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::{Role, Session, SessionState};

/// Render decision for one navigation. Evaluated fresh on every render;
/// nothing is cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    RedirectToLogin,
    RedirectToHome,
    RenderChildren,
}

/// The guard's decision table.
///
/// A missing user record counts as "no role", so a token-only session is
/// allowed onto unrestricted routes but bounced home from role-restricted
/// ones.
pub fn decide(state: &SessionState, allowed_roles: Option<&[Role]>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    if !state.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }
    if let Some(allowed) = allowed_roles {
        let permitted = state.role().is_some_and(|role| allowed.contains(&role));
        if !permitted {
            return GuardDecision::RedirectToHome;
        }
    }
    GuardDecision::RenderChildren
}

/// Wrap a routed view: renders the children only for an authenticated
/// session whose role is in `allowed_roles` (when given). Role mismatches
/// redirect home silently; unauthenticated visitors go to the login screen.
#[component]
pub fn RouteGuard(
    #[prop(optional, into)] allowed_roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<Session>();

    move || {
        let state = session.state.get();
        match decide(&state, allowed_roles.as_deref()) {
            GuardDecision::Loading => view! {
                <div class="route-guard__loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardDecision::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
            GuardDecision::RedirectToHome => view! { <Redirect path="/"/> }.into_any(),
            GuardDecision::RenderChildren => children().into_any(),
        }
    }
}
