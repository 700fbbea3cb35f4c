use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::catalog::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/services/schedules
///
/// Bookings where the caller is the customer or the provider.
pub async fn list_schedules(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.schedules.list_for_account(auth.account_id).await {
        Ok(schedules) => HttpResponse::Ok().json(schedules),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/services/schedules
///
/// # Request Body
///
/// ```json
/// {
///     "title": "Fix the sink",
///     "service_provider_id": "...",
///     "date_and_time": "2026-11-02T09:00:00Z",
///     "detail": "Kitchen, second floor"
/// }
/// ```
pub async fn create_schedule(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateScheduleRequest>,
) -> HttpResponse {
    match state
        .schedules
        .create(auth.account_id, request.into_inner().into())
        .await
    {
        Ok(schedule) => HttpResponse::Created().json(schedule),
        Err(error) => handle_domain_error(error),
    }
}

pub async fn get_schedule(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.schedules.get(auth.account_id, path.into_inner()).await {
        Ok(schedule) => HttpResponse::Ok().json(schedule),
        Err(error) => handle_domain_error(error),
    }
}

pub async fn update_schedule(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateScheduleRequest>,
) -> HttpResponse {
    match state
        .schedules
        .update(auth.account_id, path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(schedule) => HttpResponse::Ok().json(schedule),
        Err(error) => handle_domain_error(error),
    }
}

pub async fn delete_schedule(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.schedules.delete(auth.account_id, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
