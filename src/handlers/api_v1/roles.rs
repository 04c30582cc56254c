use actix_web::{web, HttpResponse};

use crate::auth::permissions::resolve_permissions;
use crate::errors::AppError;
use crate::store::RecordStore;
use crate::templates_structs::{ApiRolePermissionsResponse, ApiRoleResponse};

/// GET /api/v1/roles - Every stored role
pub async fn list(store: web::Data<RecordStore>) -> Result<HttpResponse, AppError> {
    let roles: Vec<ApiRoleResponse> = store
        .fetch_roles()
        .await
        .into_iter()
        .map(ApiRoleResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(roles))
}

/// GET /api/v1/roles/{name}/permissions - What selecting `name` would grant.
/// Unknown names answer with an empty list rather than 404.
pub async fn permissions(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let roles = store.fetch_roles().await;
    let response = ApiRolePermissionsResponse {
        known: roles.iter().any(|r| r.name == name),
        permissions: resolve_permissions(&name, &roles),
        role: name,
    };
    Ok(HttpResponse::Ok().json(response))
}
