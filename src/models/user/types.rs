use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Name of the assigned role. Not checked against the role collection.
    pub role: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(self) -> bool {
        self == UserStatus::Active
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User data before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl NewUser {
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }
}

/// In-progress form contents. `id` is set when editing an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserDraft {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Required-field check; nothing beyond presence is validated.
    pub fn validate(&self) -> Vec<String> {
        use crate::auth::validate::validate_required;

        let mut errors = vec![];
        errors.extend(validate_required(&self.name, "Name"));
        errors.extend(validate_required(&self.email, "Email"));
        errors.extend(validate_required(&self.role, "Role"));
        errors
    }

    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            status: self.status,
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        UserDraft {
            id: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
        }
    }
}

/// Form data posted by the user modal.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub csrf_token: String,
    /// Role whose permissions gate this submission.
    #[serde(default)]
    pub acting_role: String,
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: UserStatus,
}

impl UserForm {
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            id: crate::models::parse_id(self.id.as_deref()),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status,
        }
    }
}
