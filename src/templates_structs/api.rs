use serde::Serialize;

use crate::models::permission::PermissionSet;
use crate::models::role::Role;
use crate::models::user::{User, UserStatus};

/// User response for API.
#[derive(Serialize, Debug, Clone)]
pub struct ApiUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl From<User> for ApiUserResponse {
    fn from(u: User) -> Self {
        ApiUserResponse {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            status: u.status,
        }
    }
}

/// Role response for API. Permissions keep their display order.
#[derive(Serialize, Debug, Clone)]
pub struct ApiRoleResponse {
    pub id: i64,
    pub name: String,
    pub permissions: PermissionSet,
}

impl From<Role> for ApiRoleResponse {
    fn from(r: Role) -> Self {
        ApiRoleResponse {
            id: r.id,
            name: r.name,
            permissions: r.permissions,
        }
    }
}

/// Resolved permissions for a role name; empty for unknown roles.
#[derive(Serialize, Debug, Clone)]
pub struct ApiRolePermissionsResponse {
    pub role: String,
    pub known: bool,
    pub permissions: PermissionSet,
}
