pub mod types;

pub use types::*;

/// The role protected by the last-admin guard.
pub const ADMIN_ROLE: &str = "Admin";
