use crate::models::permission::Permission;
use crate::models::role::Role;
use crate::models::user::{User, UserStatus};

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: "Admin".to_string(),
            status: UserStatus::Active,
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            role: "Editor".to_string(),
            status: UserStatus::Inactive,
        },
    ]
}

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            name: "Admin".to_string(),
            permissions: [Permission::Read, Permission::Write, Permission::Delete]
                .into_iter()
                .collect(),
        },
        Role {
            id: 2,
            name: "Editor".to_string(),
            permissions: [Permission::Read, Permission::Write].into_iter().collect(),
        },
    ]
}
