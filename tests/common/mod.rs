//! Shared test infrastructure.
//!
//! - `seeded()` - a fresh record store with the two seed users and roles
//! - `acting_as()` - the active permission set for a selected role
//! - `test_app!` - the full console app with a throwaway session key

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;
use regex::Regex;

use rbac_console::auth::permissions::ActivePermissions;
use rbac_console::models::role::Role;
use rbac_console::models::user::User;
use rbac_console::store::RecordStore;

// ============================================================================
// STORE SETUP
// ============================================================================

pub fn seeded() -> RecordStore {
    RecordStore::seeded()
}

pub fn seeded_data() -> web::Data<RecordStore> {
    web::Data::new(RecordStore::seeded())
}

pub async fn acting_as(store: &RecordStore, role: &str) -> ActivePermissions {
    let roles = store.fetch_roles().await;
    ActivePermissions::resolve(Some(role), &roles)
}

pub fn role_names(roles: &[Role]) -> Vec<&str> {
    roles.iter().map(|r| r.name.as_str()).collect()
}

pub fn user_names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Build the console app around `$store` (a `web::Data<RecordStore>`).
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(rbac_console::auth::session::session_middleware(
                    actix_web::cookie::Key::generate(),
                ))
                .app_data($store.clone())
                .app_data(actix_web::web::Data::new(
                    rbac_console::models::display_mode::DisplayModeController::default(),
                ))
                .app_data(actix_web::web::Data::new(
                    rbac_console::config::AppConfig::default(),
                ))
                .configure(rbac_console::handlers::configure),
        )
        .await
    };
}
#[allow(unused_imports)]
pub(crate) use test_app;

/// The session cookie set by a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Pull the CSRF token out of a rendered page.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .map(|c| c[1].to_string())
        .expect("page has no CSRF token")
}
