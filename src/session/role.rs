//! User roles and role-string normalization.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Access role attached to a user account.
///
/// Roles gate route access: `Staff` routes on the dashboard side, the staff
/// directory for `SuperAdmin` only. Anything the server sends outside the
/// four canonical values collapses to `User`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Staff,
    #[default]
    User,
}

impl Role {
    /// Normalize a raw role string from the API or persisted storage.
    ///
    /// Input is lower-cased; the legacy spellings `superadmin` and
    /// `administrator` map to their canonical roles; unknown values become
    /// [`Role::User`].
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "super_admin" | "superadmin" => Self::SuperAdmin,
            "admin" | "administrator" => Self::Admin,
            "staff" => Self::Staff,
            _ => Self::User,
        }
    }

    /// Canonical wire/storage spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}
