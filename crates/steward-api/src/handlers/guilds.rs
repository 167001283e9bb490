//! Guild handlers
//!
//! Endpoints for guild registration and lifecycle.

use axum::{
    extract::{Path, State},
    Json,
};
use steward_service::dto::{
    CreateGuildRequest, GuildResponse, PaginatedResponse, UpdateGuildRequest,
};
use steward_service::services::GuildService;

use crate::extractors::{GuildIdPath, ListParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a guild
///
/// POST /guilds
pub async fn create_guild(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGuildRequest>,
) -> ApiResult<Created<Json<GuildResponse>>> {
    let service = GuildService::new(state.service_context());
    let response = service.create_guild(request).await?;
    Ok(Created(Json(response)))
}

/// List guilds with paging, filtering and sorting
///
/// GET /guilds
pub async fn list_guilds(
    State(state): State<AppState>,
    ListParams(filter): ListParams,
) -> ApiResult<Json<PaginatedResponse<GuildResponse>>> {
    let service = GuildService::new(state.service_context());
    let response = service.list_guilds(filter).await?;
    Ok(Json(response))
}

/// Get guild by ID
///
/// GET /guilds/{guild_id}
pub async fn get_guild(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<Json<GuildResponse>> {
    let guild_id = params.guild_id()?;

    let service = GuildService::new(state.service_context());
    let response = service.get_guild(guild_id).await?;
    Ok(Json(response))
}

/// Update guild settings
///
/// PATCH /guilds/{guild_id}
pub async fn update_guild(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateGuildRequest>,
) -> ApiResult<Json<GuildResponse>> {
    let guild_id = params.guild_id()?;

    let service = GuildService::new(state.service_context());
    let response = service.update_guild(guild_id, request).await?;
    Ok(Json(response))
}

/// Deregister a guild and cascade its configuration
///
/// DELETE /guilds/{guild_id}
pub async fn delete_guild(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<NoContent> {
    let guild_id = params.guild_id()?;

    let service = GuildService::new(state.service_context());
    service.delete_guild(guild_id).await?;
    Ok(NoContent)
}
