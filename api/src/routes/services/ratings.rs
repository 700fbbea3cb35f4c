use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::catalog::CreateRatingRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/services/providers/{id}/ratings
pub async fn list_ratings(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.ratings.list_for_provider(path.into_inner()).await {
        Ok(ratings) => HttpResponse::Ok().json(ratings),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/services/ratings
///
/// # Request Body
///
/// ```json
/// { "service_provider_id": "...", "rating": 4, "review": "On time" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Rating outside 1..=5
/// - 403 Forbidden: Caller is not a customer
/// - 404 Not Found: No such service provider
pub async fn create_rating(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateRatingRequest>,
) -> HttpResponse {
    match state
        .ratings
        .create(auth.account_id, request.into_inner().into())
        .await
    {
        Ok(rating) => HttpResponse::Created().json(rating),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/services/ratings/{id}; only the rating's customer
pub async fn delete_rating(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.ratings.delete(auth.account_id, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
