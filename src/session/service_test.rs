use std::sync::Arc;

use leptos::prelude::{GetUntracked, WithUntracked};

use super::*;
use crate::session::store::MemoryStore;

fn session() -> (Session, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (Session::new(store.clone()), store)
}

fn profile(name: &str, role: Role) -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        name: name.to_owned(),
        role,
        ..UserProfile::default()
    }
}

// =============================================================
// derive_name
// =============================================================

#[test]
fn derive_name_prefers_explicit_name() {
    let user = UserProfile {
        name: "Ada".to_owned(),
        first_name: Some("X".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(derive_name(&user), "Ada");
}

#[test]
fn derive_name_joins_first_and_last() {
    let user = UserProfile {
        first_name: Some("A".to_owned()),
        last_name: Some("B".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(derive_name(&user), "A B");
}

#[test]
fn derive_name_trims_missing_last_name() {
    let user = UserProfile {
        first_name: Some("A".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(derive_name(&user), "A");
}

#[test]
fn derive_name_falls_back_to_user() {
    assert_eq!(derive_name(&UserProfile::default()), "User");
}

// =============================================================
// Authentication invariant
// =============================================================

#[test]
fn default_state_is_loading_and_signed_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_iff_token_present() {
    let (session, _) = session();
    session.load();
    assert!(!session.is_authenticated());

    session.login("t1", profile("Ada", Role::Admin));
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn token_without_user_counts_as_authenticated() {
    let (session, store) = session();
    store.set("token", "t-orphan");
    session.load();
    let state = session.state.get_untracked();
    assert!(state.is_authenticated());
    assert!(state.user.is_none());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_token_and_user() {
    let (session, store) = session();
    session.login("t1", profile("Ada", Role::Admin));

    assert_eq!(store.get("token"), Some("t1".to_owned()));
    let raw = store.get("user").expect("user persisted");
    let saved: UserProfile = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(saved.name, "Ada");
    assert_eq!(saved.role, Role::Admin);
}

#[test]
fn login_derives_display_name() {
    let (session, _) = session();
    let user = UserProfile {
        first_name: Some("A".to_owned()),
        last_name: Some("B".to_owned()),
        role: Role::Admin,
        ..UserProfile::default()
    };
    session.login("t1", user);
    let name = session
        .state
        .with_untracked(|s| s.user.as_ref().map(|u| u.name.clone()));
    assert_eq!(name, Some("A B".to_owned()));
}

#[test]
fn login_mirrors_branch_keys() {
    let (session, store) = session();
    let user = UserProfile {
        branch_id: Some("7".to_owned()),
        branch_name: Some("Munich".to_owned()),
        ..profile("Ada", Role::Staff)
    };
    session.login("t1", user);
    assert_eq!(store.get("branch_id"), Some("7".to_owned()));
    assert_eq!(store.get("branch_name"), Some("Munich".to_owned()));
}

#[test]
fn logout_clears_every_key() {
    let (session, store) = session();
    let user = UserProfile {
        branch_id: Some("7".to_owned()),
        branch_name: Some("Munich".to_owned()),
        ..profile("Ada", Role::Staff)
    };
    session.login("t1", user);
    session.set_branch_details(&serde_json::json!({"id": 7, "name": "Munich"}));

    session.logout();
    for key in ["token", "user", "branch_id", "branch_name", "branch_details"] {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    assert!(!session.is_authenticated());

    // Idempotent.
    session.logout();
    assert!(!session.is_authenticated());
}

// =============================================================
// load
// =============================================================

#[test]
fn load_restores_persisted_session() {
    let (session, store) = session();
    session.login("t1", profile("Ada", Role::SuperAdmin));

    let restored = Session::new(store);
    restored.load();
    let state = restored.state.get_untracked();
    assert_eq!(state.token, Some("t1".to_owned()));
    assert_eq!(state.role(), Some(Role::SuperAdmin));
    assert!(!state.loading);
}

#[test]
fn load_normalizes_persisted_role() {
    let (session, store) = session();
    store.set("token", "t1");
    store.set("user", r#"{"id":"u-1","email":"a@b.com","name":"Ada","role":"SUPERADMIN"}"#);
    session.load();
    assert_eq!(session.state.get_untracked().role(), Some(Role::SuperAdmin));
}

#[test]
fn load_discards_corrupt_user_record() {
    let (session, store) = session();
    store.set("token", "t1");
    store.set("user", "{not json");
    session.load();

    let state = session.state.get_untracked();
    assert!(state.user.is_none());
    assert_eq!(store.get("user"), None, "corrupt record removed");
    // Token alone still authenticates.
    assert!(state.is_authenticated());
}

#[test]
fn load_backfills_branch_fields_from_mirror_keys() {
    let (session, store) = session();
    store.set("token", "t1");
    store.set("user", r#"{"id":"u-1","email":"a@b.com","name":"Ada","role":"staff"}"#);
    store.set("branch_id", "7");
    store.set("branch_name", "Munich");
    session.load();

    let user = session.state.get_untracked().user.expect("user");
    assert_eq!(user.branch_id, Some("7".to_owned()));
    assert_eq!(user.branch_name, Some("Munich".to_owned()));
}

// =============================================================
// Branch details
// =============================================================

#[test]
fn set_branch_details_mirrors_name_and_id() {
    let (session, store) = session();
    session.login("t1", profile("Ada", Role::Admin));
    session.set_branch_details(&serde_json::json!({"id": 7, "name": "Munich", "city": "Munich"}));

    assert_eq!(store.get("branch_id"), Some("7".to_owned()));
    assert_eq!(store.get("branch_name"), Some("Munich".to_owned()));
    assert!(store.get("branch_details").is_some());

    let user = session.state.get_untracked().user.expect("user");
    assert_eq!(user.branch_name, Some("Munich".to_owned()));
    assert!(user.branch_details.is_some());
}
