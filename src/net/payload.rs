//! Projection of loosely-shaped server JSON into typed view models.
//!
//! The backend wraps most responses in a `{"data": ...}` envelope, spells
//! fields in several ways (`branch_id` / `branchId`), and nests the login
//! token at different depths depending on the auth provider. Everything here
//! is a pure function over `serde_json::Value` so it is unit tested on the
//! host target.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde_json::Value;

use crate::session::role::Role;
use crate::session::service::UserProfile;

use super::types::{Branch, Invoice, InvoiceStatus, Staff};

/// Unwrap the standard response envelope: `body.data` when present, else the
/// raw body.
pub fn unwrap_envelope(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}

/// Server-provided human-readable error message, if the body carries one.
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// First field among `keys` that holds a string or number, as a string.
fn str_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn f64_field(value: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| value.get(key)?.as_f64())
        .unwrap_or(0.0)
}

/// Extract the bearer token from a login response body, trying each known
/// location in a fixed priority order.
pub fn extract_token(body: &Value) -> Option<String> {
    let data = body.get("data");
    data.and_then(|d| d.pointer("/session/session/access_token"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .or_else(|| data.and_then(|d| str_field(d, &["token", "accessToken"])))
        .or_else(|| str_field(body, &["token"]))
}

/// Project a raw user object from the login response into a profile.
///
/// The display name is derived later by the session service; here we only
/// carry the pieces through. Role falls back through `role`, `user_type`,
/// and `user_level`, defaulting to the plain `user` role.
pub fn profile_from_value(raw: &Value) -> UserProfile {
    let role = str_field(raw, &["role", "user_type", "user_level"])
        .map(|r| Role::normalize(&r))
        .unwrap_or_default();
    UserProfile {
        id: str_field(raw, &["id"]).unwrap_or_default(),
        email: str_field(raw, &["email"]).unwrap_or_default(),
        name: str_field(raw, &["name"]).unwrap_or_default(),
        first_name: str_field(raw, &["first_name", "firstName"]),
        last_name: str_field(raw, &["last_name", "lastName"]),
        role,
        branch_id: str_field(raw, &["branch_id", "branchId"]),
        branch_name: str_field(raw, &["branch_name", "branchName"]).or_else(|| {
            raw.get("branch")
                .and_then(|b| str_field(b, &["name"]))
        }),
        branch_details: None,
    }
}

/// Pull `(token, profile)` out of a login response, or `None` when either
/// half is missing — the caller treats that as an incomplete login.
pub fn parse_login(body: &Value) -> Option<(String, UserProfile)> {
    let token = extract_token(body)?;
    let raw_user = body
        .pointer("/data/user")
        .or_else(|| body.get("user"))?;
    Some((token, profile_from_value(raw_user)))
}

/// Project the branch collection response.
pub fn branches_from_value(body: &Value) -> Vec<Branch> {
    let Some(items) = unwrap_envelope(body).as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| Branch {
            id: str_field(item, &["id"]).unwrap_or_default(),
            name: str_field(item, &["name"]).unwrap_or_default(),
            address: str_field(item, &["address"]).unwrap_or_default(),
            logo: str_field(item, &["logo"]),
            staff_count: item
                .get("staffCount")
                .or_else(|| item.get("staff_count"))
                .and_then(Value::as_u64)
                .unwrap_or(0),
        })
        .collect()
}

/// Project the staff (admin accounts) collection response into table rows.
pub fn staff_from_value(body: &Value) -> Vec<Staff> {
    let Some(items) = unwrap_envelope(body).as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let joined = format!(
                "{} {}",
                str_field(item, &["first_name"]).unwrap_or_default(),
                str_field(item, &["last_name"]).unwrap_or_default()
            );
            let joined = joined.trim();
            let name = if joined.is_empty() {
                str_field(item, &["name"]).unwrap_or_else(|| "Admin User".to_owned())
            } else {
                joined.to_owned()
            };
            Staff {
                id: str_field(item, &["id"]).unwrap_or_default(),
                name,
                email: str_field(item, &["email"]).unwrap_or_default(),
                role: str_field(item, &["role"]).unwrap_or_else(|| "admin".to_owned()),
                branch: str_field(item, &["branch_name"])
                    .unwrap_or_else(|| "All Branches".to_owned()),
            }
        })
        .collect()
}

fn invoice_status(raw: Option<String>) -> InvoiceStatus {
    match raw.as_deref().map(str::to_lowercase).as_deref() {
        Some("approved" | "verified") => InvoiceStatus::Approved,
        Some("rejected") => InvoiceStatus::Rejected,
        _ => InvoiceStatus::Pending,
    }
}

/// Project the per-branch invoice collection response.
pub fn invoices_from_value(body: &Value) -> Vec<Invoice> {
    let Some(items) = unwrap_envelope(body).as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| Invoice {
            id: str_field(item, &["id"]).unwrap_or_default(),
            customer_name: str_field(item, &["customer_name", "customerName"])
                .unwrap_or_default(),
            date: str_field(item, &["date", "created_at"]).unwrap_or_default(),
            image: str_field(item, &["image"]),
            total: f64_field(item, &["total"]),
            subtotal: f64_field(item, &["subtotal"]),
            tax: f64_field(item, &["tax"]),
            status: invoice_status(str_field(item, &["status"])),
        })
        .collect()
}
