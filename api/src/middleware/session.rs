//! Session cookie handling for the phone verification endpoints
//!
//! The cookie carries only an opaque id; pending verification state lives in
//! the configured `SessionStore`.

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    web, Error, FromRequest, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};
use uuid::Uuid;

use hh_shared::config::SessionConfig;

use crate::state::AppState;

/// Session id from the request cookie, or a fresh one
#[derive(Debug, Clone)]
pub struct SessionId {
    pub id: String,
    /// No usable cookie came with the request
    pub is_new: bool,
}

impl SessionId {
    fn fresh() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            is_new: true,
        }
    }

    /// Set the session cookie on `response` when the id was minted for this request
    pub fn attach(&self, response: &mut HttpResponse, config: &SessionConfig) {
        if !self.is_new {
            return;
        }
        if let Err(e) = response.add_cookie(&session_cookie(&self.id, config)) {
            log::warn!("Failed to set session cookie: {}", e);
        }
    }
}

impl FromRequest for SessionId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| req.cookie(&state.session.cookie_name))
            .map(|cookie| cookie.value().to_string())
            .filter(|value| Uuid::parse_str(value).is_ok())
            .map(|id| SessionId { id, is_new: false })
            .unwrap_or_else(SessionId::fresh);

        ready(Ok(session))
    }
}

pub fn session_cookie(id: &str, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), id.to_string())
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(Duration::seconds(config.timeout as i64))
        .finish()
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}
