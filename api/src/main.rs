use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use idv_api::{app::create_app, config, routes::verification::AppState};
use idv_core::services::token::{TokenCache, TokenCacheConfig};
use idv_core::services::verification::VerificationService;
use idv_infra::create_provider;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting identity verification API server");

    let app_config = config::load().context("failed to load configuration")?;
    info!(
        "Environment: {}, provider: {:?}",
        app_config.environment, app_config.provider.provider
    );

    let provider = create_provider(&app_config.provider, app_config.environment)
        .context("failed to initialize the verification provider")?;
    let token_cache = Arc::new(TokenCache::new(
        Arc::clone(&provider),
        TokenCacheConfig::from_settings(&app_config.provider, &app_config.token_cache),
    ));
    let verification_service = Arc::new(VerificationService::new(provider, token_cache));
    let app_state = web::Data::new(AppState::new(verification_service));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = app_config.server.cors.clone();
    let environment = app_config.environment;

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors, environment));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    Ok(())
}
