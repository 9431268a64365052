//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::route_guard::RouteGuard;
use crate::config;
use crate::net::ApiClient;
use crate::pages::{
    branches::BranchesPage, dashboard::DashboardPage, invoices::InvoicesPage, login::LoginPage,
    staff::StaffPage,
};
use crate::session::store::LocalStore;
use crate::session::{Role, Session};

/// Root application component.
///
/// Builds the session service and API client once, provides them via
/// context, and sets up client-side routing with per-route guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(Arc::new(LocalStore));
    session.load();
    let api = ApiClient::new(&config::api_base_url(), session.clone());

    provide_context(session);
    provide_context(api);

    view! {
        <Title text="SB GmbH Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <RouteGuard>
                            <Layout>
                                <DashboardPage/>
                            </Layout>
                        </RouteGuard>
                    }
                />
                <Route
                    path=StaticSegment("branches")
                    view=|| view! {
                        <RouteGuard>
                            <Layout>
                                <BranchesPage/>
                            </Layout>
                        </RouteGuard>
                    }
                />
                <Route
                    path=StaticSegment("staff")
                    view=|| view! {
                        <RouteGuard allowed_roles=vec![Role::SuperAdmin]>
                            <Layout>
                                <StaffPage/>
                            </Layout>
                        </RouteGuard>
                    }
                />
                <Route
                    path=StaticSegment("invoices")
                    view=|| view! {
                        <RouteGuard>
                            <Layout>
                                <InvoicesPage/>
                            </Layout>
                        </RouteGuard>
                    }
                />
            </Routes>
        </Router>
    }
}
