//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{allowed_users, dashboard, forum, github, guilds, health, so_tags};
use crate::state::AppState;

/// Create the main API router with all versioned routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes, mounted outside the versioned API prefix
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/system/health", get(health::system_health))
}

/// Dashboard WebSocket route
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard::dashboard_handler))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(guild_routes())
}

/// Guild routes, including the per-guild config kinds
fn guild_routes() -> Router<AppState> {
    Router::new()
        // Guild CRUD
        .route("/guilds", post(guilds::create_guild))
        .route("/guilds", get(guilds::list_guilds))
        .route("/guilds/:guild_id", get(guilds::get_guild))
        .route("/guilds/:guild_id", patch(guilds::update_guild))
        .route("/guilds/:guild_id", delete(guilds::delete_guild))
        // GitHub config
        .route("/guilds/:guild_id/github", get(github::get_github_config))
        .route("/guilds/:guild_id/github", put(github::upsert_github_config))
        .route("/guilds/:guild_id/github", delete(github::delete_github_config))
        // Forum config
        .route("/guilds/:guild_id/forum", get(forum::get_forum_config))
        .route("/guilds/:guild_id/forum", put(forum::upsert_forum_config))
        .route("/guilds/:guild_id/forum", delete(forum::delete_forum_config))
        // Stack Overflow tags
        .route("/guilds/:guild_id/sotags", get(so_tags::get_so_tags))
        .route("/guilds/:guild_id/sotags", put(so_tags::upsert_so_tag))
        .route("/guilds/:guild_id/sotags/:tag_name", delete(so_tags::delete_so_tag))
        // Allowed users
        .route("/guilds/:guild_id/allowed-users", get(allowed_users::get_allowed_users))
        .route("/guilds/:guild_id/allowed-users", put(allowed_users::upsert_allowed_user))
        .route(
            "/guilds/:guild_id/allowed-users/:user_id",
            delete(allowed_users::delete_allowed_user),
        )
}
