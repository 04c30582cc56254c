use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::errors::AppError;
use crate::handlers::see_other;
use crate::models::display_mode::DisplayModeController;

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub csrf_token: String,
    pub redirect_to: Option<String>,
}

/// POST /display-mode/toggle - flip light/dark for every page, then go back.
pub async fn toggle(
    display: web::Data<DisplayModeController>,
    session: Session,
    form: web::Form<ToggleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mode = display.toggle();
    log::info!("Display mode switched to {mode}");

    // Only same-site paths; anything else goes to the user panel.
    let redirect = form
        .redirect_to
        .as_deref()
        .filter(|r| r.starts_with('/') && !r.starts_with("//"))
        .unwrap_or("/users");
    Ok(see_other(redirect))
}
