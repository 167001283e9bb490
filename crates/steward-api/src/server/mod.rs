//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use steward_common::{AppConfig, AppError, ProcessClock};
use steward_db::{
    create_pool, PgAllowedUsersRepository, PgForumConfigRepository, PgGitHubConfigRepository,
    PgGuildRepository, PgSoTagsRepository, PgUserRepository,
};
use steward_service::services::{ServiceContextBuilder, StubBotLiveness};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, dashboard_routes, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router()
        .merge(health_routes())
        .merge(dashboard_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = steward_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repositories
    let guild_repo = Arc::new(PgGuildRepository::new(pool.clone()));
    let github_repo = Arc::new(PgGitHubConfigRepository::new(pool.clone()));
    let forum_repo = Arc::new(PgForumConfigRepository::new(pool.clone()));
    let so_tags_repo = Arc::new(PgSoTagsRepository::new(pool.clone()));
    let allowed_users_repo = Arc::new(PgAllowedUsersRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

    // Build service context. There is no live channel to the bot process
    // yet, so its probe reports offline through the stub.
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .guild_repo(guild_repo)
        .github_repo(github_repo)
        .forum_repo(forum_repo)
        .so_tags_repo(so_tags_repo)
        .allowed_users_repo(allowed_users_repo)
        .user_repo(user_repo)
        .bot_liveness(Arc::new(StubBotLiveness))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, ProcessClock::start()))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");

    Ok(())
}

/// Wait for Ctrl-C, then flip the shutdown flag for the dashboard streams
async fn shutdown_signal(state: AppState) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping dashboard streams");
            state.trigger_shutdown();
        }
        Err(e) => {
            // This future resolving stops the server, so a failed
            // listener parks forever instead.
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state.clone());

    // Run server
    run_server(app, addr, state).await
}
