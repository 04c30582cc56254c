// Template context structures for Askama templates, organized by panel.

use actix_session::Session;
use chrono::Datelike;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::models::display_mode::{DisplayMode, DisplayModeController};

/// Common context shared by all pages.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub display_mode: DisplayMode,
    pub current_path: String,
    /// Panel URL including the selected role; used by cancel and dismiss links.
    pub return_to: String,
    pub year: i32,
}

impl PageContext {
    pub fn build(
        session: &Session,
        display: &DisplayModeController,
        current_path: &str,
        selected_role: &str,
    ) -> Self {
        Self {
            app_name: "Role Based Access Control".to_string(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            display_mode: display.current(),
            current_path: current_path.to_string(),
            return_to: crate::handlers::panel_location(current_path, selected_role),
            year: chrono::Local::now().year(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.display_mode == DisplayMode::Dark
    }

    /// Show a notice on this render without going through the session.
    pub fn with_notice(mut self, notice: &crate::panels::Notice) -> Self {
        self.flash = Some(notice.to_string());
        self
    }
}

mod api;
mod role;
mod user;

pub use self::api::{ApiRolePermissionsResponse, ApiRoleResponse, ApiUserResponse};
pub use self::role::RoleListTemplate;
pub use self::user::UserListTemplate;
