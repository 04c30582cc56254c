pub mod roles;
pub mod users;

use actix_web::web;

/// Configure API v1 routes. Read-only; all changes go through the panels.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(users::list))
            .route("/{id}", web::get().to(users::read))
    );
    cfg.service(
        web::scope("/roles")
            .route("", web::get().to(roles::list))
            .route("/{name}/permissions", web::get().to(roles::permissions))
    );
}
