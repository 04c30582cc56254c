use serde::Serialize;

use crate::models::permission::{Permission, PermissionSet};

/// Role names are the lookup key throughout the console; ids only address
/// records in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub permissions: PermissionSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub permissions: PermissionSet,
}

impl NewRole {
    pub fn with_id(self, id: i64) -> Role {
        Role {
            id,
            name: self.name,
            permissions: self.permissions,
        }
    }
}

/// In-progress role form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDraft {
    pub id: Option<i64>,
    pub name: String,
    pub permissions: PermissionSet,
}

impl RoleDraft {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Vec<String> {
        crate::auth::validate::validate_required(&self.name, "Role name")
            .into_iter()
            .collect()
    }

    /// One checkbox per checklist token, checked when the draft holds it.
    pub fn checkboxes(&self) -> Vec<PermissionCheckbox> {
        Permission::CHECKLIST
            .into_iter()
            .map(|p| PermissionCheckbox {
                code: p.as_str(),
                checked: self.permissions.contains(p),
            })
            .collect()
    }

    pub fn into_new_role(self) -> NewRole {
        NewRole {
            name: self.name.trim().to_string(),
            permissions: self.permissions,
        }
    }
}

impl From<&Role> for RoleDraft {
    fn from(role: &Role) -> Self {
        RoleDraft {
            id: Some(role.id),
            name: role.name.clone(),
            permissions: role.permissions.clone(),
        }
    }
}

/// A permission with its checked state for the role form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheckbox {
    pub code: &'static str,
    pub checked: bool,
}

/// Raw role form submission. Parsed from the body by hand because the
/// checklist repeats the `permissions` key.
#[derive(Debug, Clone, Default)]
pub struct RoleFormInput {
    pub csrf_token: String,
    pub acting_role: String,
    pub id: Option<i64>,
    pub name: String,
    pub permissions: Vec<String>,
}

/// A role list row with the last-admin guard precomputed.
#[derive(Debug, Clone)]
pub struct RoleRow {
    pub role: Role,
    pub guarded: bool,
}
