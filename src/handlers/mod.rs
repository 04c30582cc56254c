pub mod api_v1;
pub mod display_mode_handlers;
pub mod role_handlers;
pub mod user_handlers;

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::models::parse_id;
use crate::panels::ModalRequest;

/// Query string of a panel page: the selected role and an optional modal.
#[derive(Debug, Deserialize)]
pub struct PanelQuery {
    pub role: Option<String>,
    pub modal: Option<String>,
    pub id: Option<String>,
}

impl PanelQuery {
    pub fn modal_request(&self) -> Option<ModalRequest> {
        ModalRequest::from_params(self.modal.as_deref(), parse_id(self.id.as_deref()))
    }
}

/// Body of forms that carry nothing but the token and the acting role.
#[derive(Debug, Deserialize)]
pub struct ActingForm {
    pub csrf_token: String,
    #[serde(default)]
    pub acting_role: String,
}

/// Panel URL with the selected role kept in the query string.
pub fn panel_location(base: &str, role: &str) -> String {
    if role.is_empty() {
        return base.to_string();
    }
    match serde_urlencoded::to_string([("role", role)]) {
        Ok(query) => format!("{base}?{query}"),
        Err(e) => {
            log::warn!("Could not encode role '{role}' into URL: {e}");
            base.to_string()
        }
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Register every console route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(|| async { see_other("/users") }))
        // User panel
        .route("/users", web::get().to(user_handlers::list))
        .route("/users/save", web::post().to(user_handlers::save))
        .route("/users/{id}/delete", web::post().to(user_handlers::delete))
        // Role panel
        .route("/roles", web::get().to(role_handlers::list))
        .route("/roles/save", web::post().to(role_handlers::save))
        .route("/roles/{id}/delete", web::post().to(role_handlers::delete))
        // Display mode
        .route("/display-mode/toggle", web::post().to(display_mode_handlers::toggle))
        // JSON
        .service(web::scope("/api/v1").configure(api_v1::configure))
        // Default 404 handler (must be registered last)
        .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_location_encodes_role() {
        assert_eq!(panel_location("/users", ""), "/users");
        assert_eq!(panel_location("/users", "Admin"), "/users?role=Admin");
        assert_eq!(panel_location("/roles", "Power User"), "/roles?role=Power+User");
        assert_eq!(panel_location("/roles", "R&D"), "/roles?role=R%26D");
    }

    #[test]
    fn panel_query_parses_edit_modal() {
        let q: PanelQuery = serde_urlencoded::from_str("role=Admin&modal=edit&id=2").unwrap();
        assert_eq!(q.modal_request(), Some(ModalRequest::Edit(2)));
        let q: PanelQuery = serde_urlencoded::from_str("modal=edit&id=").unwrap();
        assert_eq!(q.modal_request(), None);
    }
}
