//! Application factory
//!
//! Builds the Actix-web application around an already wired
//! [`AppState`]; `main` and the endpoint tests share it.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use idv_core::services::verification::VerificationProviderTrait;
use idv_shared::config::{CorsConfig, Environment};
use idv_shared::types::ApiResponse;

use crate::handlers::error::json_error_handler;
use crate::middleware::{cors::create_cors, request_id::RequestIdMiddleware};
use crate::routes::verification::{
    complete_verification, start_verification, validate_phone, AppState,
};

pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found";

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
    cors: &CorsConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: VerificationProviderTrait + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Last wrapped runs first: request id, then logging, then CORS
        .wrap(create_cors(cors, environment))
        .wrap(Logger::new("%a \"%r\" %s %b %T %{x-request-id}o"))
        .wrap(RequestIdMiddleware)
        .route("/health", web::get().to(health_check))
        .configure(configure_routes::<P>)
        .default_service(web::route().to(not_found))
}

/// Mount the verification endpoints under `/api/verification`
pub fn configure_routes<P>(cfg: &mut web::ServiceConfig)
where
    P: VerificationProviderTrait + ?Sized + 'static,
{
    cfg.service(
        web::scope("/api/verification")
            .route("/start", web::post().to(start_verification::<P>))
            .route("/validate", web::post().to(validate_phone::<P>))
            .route("/complete", web::post().to(complete_verification::<P>)),
    );
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "idv-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(NOT_FOUND_MESSAGE))
}
