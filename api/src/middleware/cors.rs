//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin. Production restricts origins to the
//! comma-separated `ALLOWED_ORIGINS` list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use hh_shared::config::Environment;

/// Creates a CORS middleware instance configured for `environment`
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age, env::var("ALLOWED_ORIGINS").ok())
    } else {
        create_development_cors(max_age)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ]
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
        // Session cookie has to survive cross-origin calls from local frontends
        .supports_credentials()
}

fn create_production_cors(max_age: usize, allowed_origins: Option<String>) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age)
        .supports_credentials();

    for origin in parse_origins(allowed_origins.as_deref().unwrap_or("")) {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://app.hirehub.io, ,https://admin.hirehub.io "),
            vec!["https://app.hirehub.io", "https://admin.hirehub.io"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_create_cors_for_each_environment() {
        let _dev = create_cors(Environment::Development);
        let _prod = create_production_cors(60, Some("https://app.hirehub.io".to_string()));
    }
}
