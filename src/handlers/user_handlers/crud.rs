use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::permissions::ActivePermissions;
use crate::auth::session::set_flash;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::{ActingForm, panel_location, see_other};
use crate::models::display_mode::DisplayModeController;
use crate::models::user::UserForm;
use crate::panels::{SaveError, Saved, UserPanel};
use crate::store::RecordStore;
use crate::templates_structs::{PageContext, UserListTemplate};

/// POST /users/save - create or update, gated on the acting role's `Write`.
pub async fn save(
    store: web::Data<RecordStore>,
    config: web::Data<AppConfig>,
    display: web::Data<DisplayModeController>,
    session: Session,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let panel = UserPanel::new(&store, config.user_list_dedup);
    let roles = store.fetch_roles().await;
    let active = ActivePermissions::resolve(Some(&form.acting_role), &roles);
    let back = panel_location("/users", active.role_name());

    match panel.save(&active, form.to_draft()).await {
        Ok(saved) => {
            let verb = match saved {
                Saved::Created(_) => "created",
                Saved::Updated(_) => "updated",
            };
            set_flash(&session, &format!("User '{}' {verb}", saved.record().name));
            Ok(see_other(&back))
        }
        Err(SaveError::Denied(notice)) => {
            set_flash(&session, notice.message());
            Ok(see_other(&back))
        }
        Err(SaveError::Invalid { draft, errors }) => {
            // Keep the modal open with what was typed.
            let listing = panel.list().await;
            let ctx = PageContext::build(&session, &display, "/users", active.role_name());
            let tmpl = UserListTemplate {
                ctx,
                active,
                users: listing.users,
                roles: listing.roles,
                form: Some(draft),
                errors,
            };
            render(tmpl)
        }
    }
}

/// POST /users/{id}/delete - gated on the acting role's `Delete`.
pub async fn delete(
    store: web::Data<RecordStore>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ActingForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let panel = UserPanel::new(&store, config.user_list_dedup);
    let roles = store.fetch_roles().await;
    let active = ActivePermissions::resolve(Some(&form.acting_role), &roles);

    match panel.delete(&active, id).await {
        Ok(()) => set_flash(&session, "User deleted"),
        Err(notice) => set_flash(&session, notice.message()),
    }
    Ok(see_other(&panel_location("/users", active.role_name())))
}
