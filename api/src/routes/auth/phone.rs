use actix_web::{http::StatusCode, web, HttpResponse};

use hh_core::services::VerificationOutcome;
use hh_shared::errors::{error_codes, ErrorResponse};
use hh_shared::types::StatusMessage;

use crate::dto::auth::{UpdatePhoneRequest, VerifyPhoneRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::{AuthContext, SessionId};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/verify-phone
///
/// Call once without `otp` to receive a code by SMS, then again with the
/// code from the same session. The body may be empty; `otp` may be a
/// string or a number.
///
/// # Request Body
///
/// ```json
/// { "otp": "123456" }
/// ```
///
/// ## Response
/// `{ "status": <code>, "message": <text> }` with the same HTTP status:
/// - 200 "OTP sent successfully" / "OTP Code Verified"
/// - 400 "Invalid OTP!" / "OTP Incorrect!" / "Sending OTP Error"
/// - 400 with an `ErrorResponse` for a body that is not valid JSON; the
///   session is left as it was
/// - 403 "Phone number already validated"
pub async fn verify_phone(
    state: web::Data<AppState>,
    auth: AuthContext,
    session: SessionId,
    body: web::Bytes,
) -> HttpResponse {
    let otp = match VerifyPhoneRequest::from_body(&body) {
        Ok(request) => request.otp,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, e.to_string()))
        }
    };

    let result = state
        .verification
        .confirm_current_number(&session.id, auth.account_id, otp.as_deref())
        .await;

    respond(&state, &session, result)
}

/// Handler for POST /api/v1/auth/update-phone
///
/// # Request Body
///
/// ```json
/// { "otp": "123456", "number": "0901-000-0001" }
/// ```
///
/// ## Response
/// As for verify-phone, with 403 "Phone number already Exist" when the
/// number belongs to an account and 400 `VALIDATION_ERROR` when it is not a
/// phone number.
pub async fn update_phone(
    state: web::Data<AppState>,
    auth: AuthContext,
    session: SessionId,
    request: web::Json<UpdatePhoneRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    let result = state
        .verification
        .change_number(
            &session.id,
            auth.account_id,
            &request.number,
            request.otp.as_deref(),
        )
        .await;

    respond(&state, &session, result)
}

fn respond(
    state: &AppState,
    session: &SessionId,
    result: hh_core::errors::DomainResult<VerificationOutcome>,
) -> HttpResponse {
    let mut response = match result {
        Ok(outcome) => {
            let status = StatusCode::from_u16(outcome.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .json(StatusMessage::new(outcome.status_code(), outcome.message()))
        }
        Err(error) => handle_domain_error(error),
    };
    session.attach(&mut response, &state.session);
    response
}
