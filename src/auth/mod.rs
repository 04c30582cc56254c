pub mod csrf;
pub mod permissions;
pub mod session;
pub mod validate;
