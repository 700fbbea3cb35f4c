//! Customer and service provider account routes
//!
//! Both account kinds share one set of handlers, parameterized by an
//! [`AccountKind`] marker.

mod handlers;

use actix_web::web;

use hh_core::domain::entities::Role;

use crate::middleware::JwtAuth;

pub use handlers::{delete_account, get_account, list_accounts, register, update_account};

/// Marker selecting the role an account route serves
pub trait AccountKind: 'static {
    const ROLE: Role;
}

pub struct Customers;

impl AccountKind for Customers {
    const ROLE: Role = Role::Customer;
}

pub struct ServiceProviders;

impl AccountKind for ServiceProviders {
    const ROLE: Role = Role::ServiceProvider;
}

fn scope<K: AccountKind>(path: &str) -> actix_web::Scope {
    web::scope(path)
        .service(
            web::resource("")
                .route(web::post().to(register::<K>))
                .route(web::get().to(list_accounts::<K>)),
        )
        .service(
            web::resource("/{id}")
                .wrap(JwtAuth::new())
                .route(web::get().to(get_account::<K>))
                .route(web::put().to(update_account::<K>))
                .route(web::delete().to(delete_account::<K>)),
        )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scope::<Customers>("/customers"))
        .service(scope::<ServiceProviders>("/service-providers"));
}
