//! CORS middleware configuration for the browser client.
//!
//! Development is permissive. Elsewhere only the configured origins are
//! allowed, and only for the methods and headers the verification flow uses.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use idv_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance configured for the current environment.
///
/// An `allowed_origins` entry of `*` allows any origin in every environment.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_development() || config.allows_any_origin() {
        create_permissive_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

fn create_permissive_cors(max_age: usize) -> Cors {
    log::info!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for {} allowed origin(s)", config.allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
