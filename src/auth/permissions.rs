use crate::models::permission::{Permission, PermissionSet};
use crate::models::role::Role;
use crate::panels::Notice;

/// Look up a role by exact name. Unknown names resolve to no permissions.
pub fn resolve_permissions(role_name: &str, roles: &[Role]) -> PermissionSet {
    roles
        .iter()
        .find(|r| r.name == role_name)
        .map(|r| r.permissions.clone())
        .unwrap_or_default()
}

pub fn has_permission(permission: Permission, active: &PermissionSet) -> bool {
    active.contains(permission)
}

/// The permission set of whichever role a panel currently has selected.
/// Passed explicitly into every gated operation.
#[derive(Debug, Clone, Default)]
pub struct ActivePermissions {
    role_name: String,
    set: PermissionSet,
}

impl ActivePermissions {
    /// An empty or missing selection acts as "no role selected".
    pub fn resolve(role_name: Option<&str>, roles: &[Role]) -> Self {
        let role_name = role_name.map(str::trim).unwrap_or_default();
        Self {
            role_name: role_name.to_string(),
            set: resolve_permissions(role_name, roles),
        }
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn set(&self) -> &PermissionSet {
        &self.set
    }

    pub fn allows(&self, permission: Permission) -> bool {
        has_permission(permission, &self.set)
    }

    /// Token form of `allows` for templates. Unknown tokens are never held.
    pub fn has(&self, token: &str) -> bool {
        token.parse().is_ok_and(|p| self.allows(p))
    }

    /// Check a permission; returns the denial notice if it is missing.
    pub fn require(&self, permission: Permission, denial: &str) -> Result<(), Notice> {
        if self.allows(permission) {
            Ok(())
        } else {
            log::info!(
                "Denied: role '{}' lacks {permission}: {denial}",
                self.role_name
            );
            Err(Notice::new(denial))
        }
    }
}
