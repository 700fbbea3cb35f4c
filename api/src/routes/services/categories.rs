use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::catalog::CreateCategoryRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/services/categories
pub async fn list_categories(state: web::Data<AppState>) -> HttpResponse {
    match state.categories.list().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/services/categories
///
/// ## Errors
/// - 400 Bad Request: Empty name or longer than 225 characters
/// - 409 Conflict: A category with that name exists
pub async fn create_category(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateCategoryRequest>,
) -> HttpResponse {
    log::debug!("Category create by {}", auth.account_id);

    match state.categories.create(&request.name).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/services/categories/{id}
pub async fn delete_category(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.categories.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
