use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::permissions::ActivePermissions;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::PanelQuery;
use crate::models::display_mode::DisplayModeController;
use crate::panels::UserPanel;
use crate::store::RecordStore;
use crate::templates_structs::{PageContext, UserListTemplate};

/// GET /users - the user table, plus the form modal when `modal=` asks for
/// one and the selected role allows it.
pub async fn list(
    store: web::Data<RecordStore>,
    config: web::Data<AppConfig>,
    display: web::Data<DisplayModeController>,
    session: Session,
    query: web::Query<PanelQuery>,
) -> Result<HttpResponse, AppError> {
    let panel = UserPanel::new(&store, config.user_list_dedup);
    let listing = panel.list().await;
    let active = ActivePermissions::resolve(query.role.as_deref(), &listing.roles);

    let mut ctx = PageContext::build(&session, &display, "/users", active.role_name());
    let mut form = None;
    if let Some(request) = query.modal_request() {
        match panel.open(&active, request).await {
            Ok(mode) => form = mode.into_draft(),
            Err(notice) => ctx = ctx.with_notice(&notice),
        }
    }

    let tmpl = UserListTemplate {
        ctx,
        active,
        users: listing.users,
        roles: listing.roles,
        form,
        errors: vec![],
    };
    render(tmpl)
}
