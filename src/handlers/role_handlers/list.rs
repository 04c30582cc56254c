use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::permissions::ActivePermissions;
use crate::errors::{AppError, render};
use crate::handlers::PanelQuery;
use crate::models::display_mode::DisplayModeController;
use crate::panels::RolePanel;
use crate::store::RecordStore;
use crate::templates_structs::{PageContext, RoleListTemplate};

/// GET /roles - the role table, plus the form modal when requested and
/// allowed by both the selected role and the last-admin guard.
pub async fn list(
    store: web::Data<RecordStore>,
    display: web::Data<DisplayModeController>,
    session: Session,
    query: web::Query<PanelQuery>,
) -> Result<HttpResponse, AppError> {
    let panel = RolePanel::new(&store);
    let rows = panel.list().await;
    let roles = store.fetch_roles().await;
    let active = ActivePermissions::resolve(query.role.as_deref(), &roles);

    let mut ctx = PageContext::build(&session, &display, "/roles", active.role_name());
    let mut form = None;
    if let Some(request) = query.modal_request() {
        match panel.open(&active, request).await {
            Ok(mode) => form = mode.into_draft(),
            Err(notice) => ctx = ctx.with_notice(&notice),
        }
    }

    render(RoleListTemplate::new(ctx, active, rows, form, vec![]))
}
