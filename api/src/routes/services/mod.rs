//! Catalog routes: categories, ratings and schedules
//!
//! Everything except category listing needs a bearer token.

pub mod categories;
pub mod ratings;
pub mod schedules;

use actix_web::web;

use crate::middleware::JwtAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(categories::list_categories))
            .route(
                web::post()
                    .to(categories::create_category)
                    .wrap(JwtAuth::new()),
            ),
    )
    .service(
        web::resource("/categories/{id}")
            .wrap(JwtAuth::new())
            .route(web::delete().to(categories::delete_category)),
    )
    .service(
        web::resource("/providers/{id}/ratings")
            .wrap(JwtAuth::new())
            .route(web::get().to(ratings::list_ratings)),
    )
    .service(
        web::resource("/ratings")
            .wrap(JwtAuth::new())
            .route(web::post().to(ratings::create_rating)),
    )
    .service(
        web::resource("/ratings/{id}")
            .wrap(JwtAuth::new())
            .route(web::delete().to(ratings::delete_rating)),
    )
    .service(
        web::resource("/schedules")
            .wrap(JwtAuth::new())
            .route(web::get().to(schedules::list_schedules))
            .route(web::post().to(schedules::create_schedule)),
    )
    .service(
        web::resource("/schedules/{id}")
            .wrap(JwtAuth::new())
            .route(web::get().to(schedules::get_schedule))
            .route(web::put().to(schedules::update_schedule))
            .route(web::delete().to(schedules::delete_schedule)),
    );
}
