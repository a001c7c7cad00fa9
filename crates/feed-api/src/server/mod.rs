//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use feed_common::{AppConfig, AppError};
use feed_db::{
    create_pool, run_migrations, DatabaseConfig, PgFeedLikeRepository, PgFeedRepository,
    PgMemberRepository,
};
use feed_oauth::GoogleOAuthProvider;
use feed_service::ServiceContextBuilder;
use feed_storage::{LocalFileStorage, LocalStorageConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(config.storage.max_file_size_bytes()),
        &config.rate_limit,
        &config.cors,
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database schema is up to date");
    }

    // File storage
    let storage = LocalFileStorage::new(&LocalStorageConfig::from(&config.storage))
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    // Identity provider
    let google = GoogleOAuthProvider::new(&config.google)
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Create repositories
    let member_repo = Arc::new(PgMemberRepository::new(pool.clone()));
    let feed_repo = Arc::new(PgFeedRepository::new(pool.clone()));
    let feed_like_repo = Arc::new(PgFeedLikeRepository::new(pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .member_repo(member_repo)
        .feed_repo(feed_repo)
        .feed_like_repo(feed_like_repo)
        .file_storage(Arc::new(storage))
        .identity_provider(Arc::new(google))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
