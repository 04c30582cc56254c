use askama::Template;

use crate::auth::permissions::ActivePermissions;
use crate::models::role::{PermissionCheckbox, RoleDraft, RoleRow};
use super::PageContext;

#[derive(Template)]
#[template(path = "roles/list.html")]
pub struct RoleListTemplate {
    pub ctx: PageContext,
    pub active: ActivePermissions,
    pub roles: Vec<RoleRow>,
    /// Present while the form modal is open.
    pub form: Option<RoleDraft>,
    pub checkboxes: Vec<PermissionCheckbox>,
    pub errors: Vec<String>,
}

impl RoleListTemplate {
    pub fn new(
        ctx: PageContext,
        active: ActivePermissions,
        roles: Vec<RoleRow>,
        form: Option<RoleDraft>,
        errors: Vec<String>,
    ) -> Self {
        let checkboxes = form.as_ref().map(RoleDraft::checkboxes).unwrap_or_default();
        Self { ctx, active, roles, form, checkboxes, errors }
    }
}
