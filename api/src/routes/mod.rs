//! HTTP routes, mounted under `/api/v1`

pub mod accounts;
pub mod auth;
pub mod services;

use actix_web::web;

/// Register every `/api/v1` scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(accounts::configure)
            .service(web::scope("/auth").configure(auth::configure))
            .service(web::scope("/services").configure(services::configure)),
    );
}
