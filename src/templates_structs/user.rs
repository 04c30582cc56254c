use askama::Template;

use crate::auth::permissions::ActivePermissions;
use crate::models::role::Role;
use crate::models::user::{User, UserDraft};
use super::PageContext;

#[derive(Template)]
#[template(path = "users/list.html")]
pub struct UserListTemplate {
    pub ctx: PageContext,
    pub active: ActivePermissions,
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    /// Present while the form modal is open.
    pub form: Option<UserDraft>,
    pub errors: Vec<String>,
}
