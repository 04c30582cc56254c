use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::store::RecordStore;
use crate::templates_structs::ApiUserResponse;

/// GET /api/v1/users - Every stored user, unfiltered
pub async fn list(store: web::Data<RecordStore>) -> Result<HttpResponse, AppError> {
    let users: Vec<ApiUserResponse> = store
        .fetch_users()
        .await
        .into_iter()
        .map(ApiUserResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/v1/users/{id} - Get single user by ID
pub async fn read(
    store: web::Data<RecordStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = store
        .find_user(path.into_inner())
        .await
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiUserResponse::from(user)))
}
