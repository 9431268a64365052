//! The session service: in-memory authenticated state backed by a persisted
//! key-value store.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::sync::Arc;

use leptos::prelude::{RwSignal, Set, Update, WithUntracked};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::role::Role;
use super::store::{
    KEY_BRANCH_DETAILS, KEY_BRANCH_ID, KEY_BRANCH_NAME, KEY_TOKEN, KEY_USER, SessionStore,
};

/// Profile of the signed-in user, as persisted under the `user` storage key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_details: Option<Value>,
}

/// Display name for a profile: explicit `name`, else first + last name,
/// else the literal `"User"`.
pub fn derive_name(profile: &UserProfile) -> String {
    let name = profile.name.trim();
    if !name.is_empty() {
        return name.to_owned();
    }
    let full = format!(
        "{} {}",
        profile.first_name.as_deref().unwrap_or_default(),
        profile.last_name.as_deref().unwrap_or_default()
    );
    let full = full.trim();
    if full.is_empty() {
        "User".to_owned()
    } else {
        full.to_owned()
    }
}

/// Reactive snapshot of the current session.
///
/// `loading` is `true` only before [`Session::load`] has run; a stored token
/// is the sole authentication criterion (a token without a readable user
/// record still counts as signed in, matching the deployed behavior).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Session service provided to components via context.
///
/// Holds the reactive [`SessionState`] and the injected persistence port.
/// Accessing it with `expect_context` outside the provider is a programming
/// error and panics immediately.
#[derive(Clone)]
pub struct Session {
    pub state: RwSignal<SessionState>,
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            store,
        }
    }

    /// Handle on the persistence port, for collaborators that read the
    /// stored token directly (the HTTP client's bearer middleware).
    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    /// Initialize from the store. A user record that fails to parse is
    /// discarded (the key is removed) and the session starts signed out;
    /// corruption never crashes the UI.
    pub fn load(&self) {
        let token = self.store.get(KEY_TOKEN);
        let user = self.store.get(KEY_USER).and_then(|raw| {
            match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("discarding unreadable session user record: {err}");
                    self.store.remove(KEY_USER);
                    None
                }
            }
        });
        let user = user.map(|mut user| {
            // Backfill branch fields from their mirror keys for sessions
            // written before the fields moved onto the user record.
            if user.branch_id.is_none() {
                user.branch_id = self.store.get(KEY_BRANCH_ID);
            }
            if user.branch_name.is_none() {
                user.branch_name = self.store.get(KEY_BRANCH_NAME);
            }
            user
        });
        self.state.set(SessionState {
            token,
            user,
            loading: false,
        });
    }

    /// Establish a new session: persist the token and normalized profile,
    /// mirror the branch fields, and replace the in-memory state.
    pub fn login(&self, token: &str, mut user: UserProfile) {
        user.name = derive_name(&user);
        self.store.set(KEY_TOKEN, token);
        if let Ok(raw) = serde_json::to_string(&user) {
            self.store.set(KEY_USER, &raw);
        }
        if let Some(branch_id) = &user.branch_id {
            self.store.set(KEY_BRANCH_ID, branch_id);
        }
        if let Some(branch_name) = &user.branch_name {
            self.store.set(KEY_BRANCH_NAME, branch_name);
        }
        self.state.set(SessionState {
            token: Some(token.to_owned()),
            user: Some(user),
            loading: false,
        });
    }

    /// Clear the session from storage and memory. Idempotent.
    pub fn logout(&self) {
        for key in [
            KEY_TOKEN,
            KEY_USER,
            KEY_BRANCH_ID,
            KEY_BRANCH_NAME,
            KEY_BRANCH_DETAILS,
        ] {
            self.store.remove(key);
        }
        self.state.set(SessionState {
            token: None,
            user: None,
            loading: false,
        });
    }

    /// Record the full branch detail payload fetched after login, mirroring
    /// its name and id into their legacy keys and onto the user profile
    /// where those are missing.
    pub fn set_branch_details(&self, details: &Value) {
        if let Ok(raw) = serde_json::to_string(details) {
            self.store.set(KEY_BRANCH_DETAILS, &raw);
        }
        let name = details.get("name").and_then(Value::as_str).map(str::to_owned);
        let id = details.get("id").map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        if let Some(name) = &name {
            self.store.set(KEY_BRANCH_NAME, name);
        }
        if let Some(id) = &id {
            self.store.set(KEY_BRANCH_ID, id);
        }
        self.state.update(|state| {
            if let Some(user) = &mut state.user {
                if user.branch_name.is_none() {
                    user.branch_name = name.clone();
                }
                if user.branch_id.is_none() {
                    user.branch_id = id.clone();
                }
                user.branch_details = Some(details.clone());
            }
        });
    }

    /// Non-reactive read of the current token.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Non-reactive read of the current authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(SessionState::is_authenticated)
    }
}
