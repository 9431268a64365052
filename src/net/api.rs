//! The HTTP client for the SB GmbH REST API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host-side: stubs returning errors, since the API is only reachable from
//! the browser. The 401 policy predicate and URL joining stay un-gated so
//! they are covered by host tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; nothing is retried. The one
//! global recovery policy is the authoritative 401: the client clears the
//! session and forces navigation to `/login` before surfacing
//! [`ApiError::Unauthorized`] to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::session::Session;
use crate::session::service::UserProfile;

use super::error::ApiError;
use super::types::{Branch, Invoice, Staff};

#[cfg(feature = "csr")]
use std::sync::Arc;

#[cfg(feature = "csr")]
use super::payload;

#[cfg(feature = "csr")]
use crate::session::store::KEY_TOKEN;

/// The login endpoint is exempt from the 401 forced-logout policy: a 401
/// there is just a failed credential check.
pub const LOGIN_PATH: &str = "/auth/login";

#[cfg(not(feature = "csr"))]
const OFFLINE: &str = "not available outside the browser";

/// Whether an error response must clear the session and redirect to login.
pub fn is_session_expiry(status: u16, url: &str) -> bool {
    status == 401 && !url.contains(LOGIN_PATH)
}

/// A request-phase middleware: takes the outgoing request builder and
/// returns it, possibly augmented. Applied in registration order before
/// every dispatch.
#[cfg(feature = "csr")]
pub type RequestMiddleware =
    Arc<dyn Fn(gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder + Send + Sync>;

/// Shared API client, constructed once at startup and provided via context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
    #[cfg(feature = "csr")]
    middleware: Vec<RequestMiddleware>,
}

impl ApiClient {
    /// Build a client for `base_url`. Installs the bearer middleware, which
    /// reads the token from the session store before every request and
    /// attaches `Authorization: Bearer <token>` when one is present.
    pub fn new(base_url: &str, session: Session) -> Self {
        #[cfg(feature = "csr")]
        let middleware: Vec<RequestMiddleware> = {
            let store = session.store();
            vec![Arc::new(move |req: gloo_net::http::RequestBuilder| {
                match store.get(KEY_TOKEN) {
                    Some(token) => req.header("Authorization", &format!("Bearer {token}")),
                    None => req,
                }
            })]
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
            #[cfg(feature = "csr")]
            middleware,
        }
    }

    /// Append a middleware to the request pipeline.
    #[cfg(feature = "csr")]
    pub fn with_middleware(mut self, middleware: RequestMiddleware) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(feature = "csr")]
    fn apply_middleware(
        &self,
        mut req: gloo_net::http::RequestBuilder,
    ) -> gloo_net::http::RequestBuilder {
        for mw in &self.middleware {
            req = mw(req);
        }
        req
    }

    /// Common response handling: decode the body, enforce the 401 policy,
    /// and map non-2xx statuses to [`ApiError::Server`].
    #[cfg(feature = "csr")]
    async fn handle(
        &self,
        url: &str,
        sent: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<Value, ApiError> {
        let resp = sent.map_err(|err| ApiError::Network(err.to_string()))?;
        let status = resp.status();
        let body = resp.json::<Value>().await.unwrap_or(Value::Null);

        if resp.ok() {
            return Ok(body);
        }
        if is_session_expiry(status, url) {
            log::warn!("401 on {url}: clearing session");
            self.session.logout();
            force_login_redirect();
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Server {
            status,
            message: payload::server_message(&body)
                .unwrap_or_else(|| ApiError::GENERIC_MESSAGE.to_owned()),
        })
    }

    #[cfg(feature = "csr")]
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        let req = self.apply_middleware(gloo_net::http::Request::get(&url));
        self.handle(&url, req.send().await).await
    }

    #[cfg(feature = "csr")]
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        let req = self
            .apply_middleware(gloo_net::http::Request::post(&url))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        self.handle(&url, req.send().await).await
    }

    #[cfg(feature = "csr")]
    async fn patch(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        let req = self.apply_middleware(gloo_net::http::Request::patch(&url));
        self.handle(&url, req.send().await).await
    }

    /// `POST /auth/login`. Returns the token and the projected profile; an
    /// OK response missing either is reported as a decode failure.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, UserProfile), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = self
                .post_json(LOGIN_PATH, &serde_json::json!({"email": email, "password": password}))
                .await?;
            payload::parse_login(&body).ok_or_else(|| {
                ApiError::Decode("login response missing token or user".to_owned())
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `POST /auth/register` — create a staff account. The role is fixed to
    /// `admin` from this client.
    pub async fn register_staff(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        branch_id: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json(
                "/auth/register",
                &serde_json::json!({
                    "first_name": first_name,
                    "last_name": last_name,
                    "email": email,
                    "password": password,
                    "branch_id": branch_id,
                    "role": "admin",
                }),
            )
            .await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (first_name, last_name, email, password, branch_id);
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `GET /auth/get-all-admins` — the staff directory.
    pub async fn fetch_staff(&self) -> Result<Vec<Staff>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = self.get("/auth/get-all-admins").await?;
            Ok(payload::staff_from_value(&body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `GET /branch` — all branch locations.
    pub async fn fetch_branches(&self) -> Result<Vec<Branch>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = self.get("/branch").await?;
            Ok(payload::branches_from_value(&body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `GET /branch/{id}` — full detail for one branch, unwrapped from the
    /// response envelope.
    pub async fn fetch_branch(&self, id: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = self.get(&format!("/branch/{id}")).await?;
            Ok(payload::unwrap_envelope(&body).clone())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `POST /branch` — create a branch, multipart so the logo file can ride
    /// along. The browser supplies the multipart boundary.
    #[cfg(feature = "csr")]
    pub async fn create_branch(
        &self,
        name: &str,
        address: &str,
        logo: Option<&web_sys::File>,
    ) -> Result<(), ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
        let _ = form.append_with_str("name", name);
        let _ = form.append_with_str("address", address);
        if let Some(file) = logo {
            let _ = form.append_with_blob_and_filename("logo", file, &file.name());
        }
        let url = self.endpoint("/branch");
        let req = self
            .apply_middleware(gloo_net::http::Request::post(&url))
            .body(form)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        self.handle(&url, req.send().await).await?;
        Ok(())
    }

    /// `GET /invoice/get-invoices-by-branch-id/{id}`.
    pub async fn fetch_invoices(&self, branch_id: &str) -> Result<Vec<Invoice>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = self
                .get(&format!("/invoice/get-invoices-by-branch-id/{branch_id}"))
                .await?;
            Ok(payload::invoices_from_value(&body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = branch_id;
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `PATCH /invoice/approve/{id}`.
    pub async fn approve_invoice(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.patch(&format!("/invoice/approve/{id}")).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }

    /// `PATCH /invoice/reject/{id}`.
    pub async fn reject_invoice(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.patch(&format!("/invoice/reject/{id}")).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Network(OFFLINE.to_owned()))
        }
    }
}

/// Full navigation to the login screen after a forced logout.
#[cfg(feature = "csr")]
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
