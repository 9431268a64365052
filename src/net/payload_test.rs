use serde_json::json;

use super::*;
use crate::session::Role;

// =============================================================
// Envelope & messages
// =============================================================

#[test]
fn unwrap_envelope_prefers_data_field() {
    let body = json!({"data": [1, 2], "meta": {}});
    assert_eq!(unwrap_envelope(&body), &json!([1, 2]));
}

#[test]
fn unwrap_envelope_falls_back_to_raw_body() {
    let body = json!([{"id": 1}]);
    assert_eq!(unwrap_envelope(&body), &body);
}

#[test]
fn server_message_reads_message_field() {
    assert_eq!(
        server_message(&json!({"message": "Invalid credentials"})),
        Some("Invalid credentials".to_owned())
    );
    assert_eq!(server_message(&json!({"error": "x"})), None);
    assert_eq!(server_message(&json!("oops")), None);
}

// =============================================================
// Token extraction priority
// =============================================================

#[test]
fn token_prefers_nested_session_path() {
    let body = json!({
        "data": {
            "session": {"session": {"access_token": "t-nested"}},
            "token": "t-flat"
        }
    });
    assert_eq!(extract_token(&body), Some("t-nested".to_owned()));
}

#[test]
fn token_falls_back_to_data_token_then_access_token() {
    let body = json!({"data": {"token": "t1", "accessToken": "t2"}});
    assert_eq!(extract_token(&body), Some("t1".to_owned()));

    let body = json!({"data": {"accessToken": "t2"}});
    assert_eq!(extract_token(&body), Some("t2".to_owned()));
}

#[test]
fn token_falls_back_to_top_level() {
    let body = json!({"token": "t-top", "user": {}});
    assert_eq!(extract_token(&body), Some("t-top".to_owned()));
}

#[test]
fn token_absent_yields_none() {
    assert_eq!(extract_token(&json!({"data": {"user": {}}})), None);
}

// =============================================================
// Login parsing
// =============================================================

#[test]
fn parse_login_normalizes_role_and_carries_names() {
    let body = json!({
        "data": {
            "token": "t1",
            "user": {"first_name": "A", "last_name": "B", "role": "ADMINISTRATOR"}
        }
    });
    let (token, user) = parse_login(&body).expect("login parsed");
    assert_eq!(token, "t1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.first_name.as_deref(), Some("A"));
    assert_eq!(user.last_name.as_deref(), Some("B"));
}

#[test]
fn parse_login_requires_both_token_and_user() {
    assert!(parse_login(&json!({"data": {"token": "t1"}})).is_none());
    assert!(parse_login(&json!({"data": {"user": {"id": 1}}})).is_none());
}

#[test]
fn profile_projection_handles_field_variants() {
    let raw = json!({
        "id": 42,
        "email": "a@b.com",
        "user_type": "superadmin",
        "branchId": 7,
        "branch": {"name": "Munich"}
    });
    let user = profile_from_value(&raw);
    assert_eq!(user.id, "42");
    assert_eq!(user.role, Role::SuperAdmin);
    assert_eq!(user.branch_id.as_deref(), Some("7"));
    assert_eq!(user.branch_name.as_deref(), Some("Munich"));
}

#[test]
fn profile_without_role_defaults_to_user() {
    let user = profile_from_value(&json!({"id": "u-1", "email": "a@b.com"}));
    assert_eq!(user.role, Role::User);
}

// =============================================================
// Collection projections
// =============================================================

#[test]
fn branches_projection_reads_enveloped_list() {
    let body = json!({"data": [
        {"id": 1, "name": "Munich", "address": "Marienplatz 1", "staffCount": 4},
        {"id": "b-2", "name": "Berlin", "logo": "http://x/logo.png"}
    ]});
    let branches = branches_from_value(&body);
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].id, "1");
    assert_eq!(branches[0].staff_count, 4);
    assert_eq!(branches[1].address, "");
    assert_eq!(branches[1].logo.as_deref(), Some("http://x/logo.png"));
}

#[test]
fn branches_projection_tolerates_non_list_body() {
    assert!(branches_from_value(&json!({"data": {"weird": true}})).is_empty());
}

#[test]
fn staff_projection_derives_names_and_fallbacks() {
    let body = json!({"data": [
        {"id": 1, "first_name": "A", "last_name": "B", "email": "ab@x.com", "branch_name": "Munich"},
        {"id": 2, "email": "c@x.com"}
    ]});
    let staff = staff_from_value(&body);
    assert_eq!(staff[0].name, "A B");
    assert_eq!(staff[0].branch, "Munich");
    assert_eq!(staff[1].name, "Admin User");
    assert_eq!(staff[1].role, "admin");
    assert_eq!(staff[1].branch, "All Branches");
}

#[test]
fn invoices_projection_maps_status_strings() {
    let body = json!([
        {"id": "i-1", "total": 10.5, "status": "approved"},
        {"id": "i-2", "status": "Verified"},
        {"id": "i-3", "status": "rejected"},
        {"id": "i-4"}
    ]);
    let invoices = invoices_from_value(&body);
    assert_eq!(invoices[0].status, InvoiceStatus::Approved);
    assert!((invoices[0].total - 10.5).abs() < f64::EPSILON);
    assert_eq!(invoices[1].status, InvoiceStatus::Approved);
    assert_eq!(invoices[2].status, InvoiceStatus::Rejected);
    assert_eq!(invoices[3].status, InvoiceStatus::Pending);
}
