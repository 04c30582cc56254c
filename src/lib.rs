//! Role-based access control console: users and roles in an in-memory
//! record store, every change gated by the selected role's permissions.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod panels;
pub mod store;
pub mod templates_structs;
