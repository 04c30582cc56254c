use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::permissions::ActivePermissions;
use crate::auth::session::set_flash;
use crate::errors::{AppError, render};
use crate::handlers::{ActingForm, panel_location, see_other};
use crate::models::display_mode::DisplayModeController;
use crate::panels::{RolePanel, SaveError, Saved};
use crate::store::RecordStore;
use crate::templates_structs::{PageContext, RoleListTemplate};

use super::helpers::parse_role_form;

/// POST /roles/save - body parsed by hand for the repeated checklist key.
pub async fn save(
    store: web::Data<RecordStore>,
    display: web::Data<DisplayModeController>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let input = parse_role_form(&body);
    csrf::validate_csrf(&session, &input.csrf_token)?;

    let panel = RolePanel::new(&store);
    let roles = store.fetch_roles().await;
    let active = ActivePermissions::resolve(Some(&input.acting_role), &roles);
    let back = panel_location("/roles", active.role_name());

    let draft = panel.draft_from_form(&input).await;
    match panel.save(&active, draft).await {
        Ok(saved) => {
            let verb = match saved {
                Saved::Created(_) => "created",
                Saved::Updated(_) => "updated",
            };
            set_flash(&session, &format!("Role '{}' {verb}", saved.record().name));
            Ok(see_other(&back))
        }
        Err(SaveError::Denied(notice)) => {
            set_flash(&session, notice.message());
            Ok(see_other(&back))
        }
        Err(SaveError::Invalid { draft, errors }) => {
            let rows = panel.list().await;
            let ctx = PageContext::build(&session, &display, "/roles", active.role_name());
            render(RoleListTemplate::new(ctx, active, rows, Some(draft), errors))
        }
    }
}

/// POST /roles/{id}/delete - last-admin guard, then the acting role's `Delete`.
pub async fn delete(
    store: web::Data<RecordStore>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ActingForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let panel = RolePanel::new(&store);
    let roles = store.fetch_roles().await;
    let active = ActivePermissions::resolve(Some(&form.acting_role), &roles);

    match panel.delete(&active, id).await {
        Ok(()) => set_flash(&session, "Role deleted"),
        Err(notice) => set_flash(&session, notice.message()),
    }
    Ok(see_other(&panel_location("/roles", active.role_name())))
}
