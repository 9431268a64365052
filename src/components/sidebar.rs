//! Navigation sidebar with the current-user block and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::{Role, Session};

/// Sidebar: brand block, nav links, signed-in user, logout.
///
/// The Staff link is only offered to `super_admin` users; the route guard
/// still enforces the restriction for direct navigation.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    let links = {
        let session = session.clone();
        move || {
            let role = session.state.get().role();
            let mut items = vec![("Dashboard", "/"), ("Branches", "/branches")];
            if role == Some(Role::SuperAdmin) {
                items.push(("Staff", "/staff"));
            }
            items.push(("Invoices", "/invoices"));
            items
        }
    };

    let user_name = {
        let session = session.clone();
        move || {
            session
                .state
                .get()
                .user
                .map_or_else(|| "Admin User".to_owned(), |user| user.name)
        }
    };
    let user_role = {
        let session = session.clone();
        move || {
            session
                .state
                .get()
                .role()
                .unwrap_or_default()
                .to_string()
        }
    };
    let user_initial = {
        let name = user_name.clone();
        move || name().chars().next().unwrap_or('A').to_uppercase().to_string()
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__top">
                <div class="sidebar__brand">
                    <span class="sidebar__brand-mark">"SB"</span>
                    <span class="sidebar__brand-name">"SB GmbH"</span>
                </div>

                <nav class="sidebar__nav">
                    {move || {
                        links()
                            .into_iter()
                            .map(|(title, path)| {
                                let active = location.pathname.get() == path;
                                view! {
                                    <a
                                        class="sidebar__link"
                                        class:sidebar__link--active=active
                                        href=path
                                    >
                                        {title}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </div>

            <div class="sidebar__bottom">
                <div class="sidebar__user">
                    <span class="sidebar__avatar">{user_initial}</span>
                    <span class="sidebar__user-meta">
                        <span class="sidebar__user-name">{user_name}</span>
                        <span class="sidebar__user-role">{user_role}</span>
                    </span>
                </div>
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
