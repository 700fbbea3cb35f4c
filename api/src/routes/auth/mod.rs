//! Authentication route handlers
//!
//! This module contains the credential and verification endpoints:
//! - Login per role and token refresh
//! - Email verification links
//! - Phone verification and phone number change
//! - Password change and reset

pub mod login;
pub mod password;
pub mod phone;
pub mod verify_email;

use actix_web::web;

use crate::middleware::JwtAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/customer-login", web::post().to(login::customer_login))
        .route(
            "/service-provider-login",
            web::post().to(login::service_provider_login),
        )
        .route("/refresh", web::post().to(login::refresh))
        .route("/verify-email", web::get().to(verify_email::verify_email))
        .service(
            web::resource("/verify-phone")
                .wrap(JwtAuth::verification_flow())
                .route(web::post().to(phone::verify_phone)),
        )
        .service(
            web::resource("/update-phone")
                .wrap(JwtAuth::verification_flow())
                .route(web::post().to(phone::update_phone)),
        )
        .service(
            web::resource("/change-password")
                .wrap(JwtAuth::new())
                .route(web::put().to(password::change_password)),
        )
        .route(
            "/reset-password-email",
            web::post().to(password::request_reset_email),
        )
        .route("/reset-password", web::post().to(password::reset_password));
}
