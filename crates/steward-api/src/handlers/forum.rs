//! Forum config handlers
//!
//! Endpoints for the per-guild help and showcase forum settings.

use axum::{
    extract::{Path, State},
    Json,
};
use steward_service::dto::{ForumConfigResponse, UpsertForumConfigRequest};
use steward_service::services::ForumConfigService;

use crate::extractors::{GuildIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the guild's forum config
///
/// GET /guilds/{guild_id}/forum
pub async fn get_forum_config(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<Json<ForumConfigResponse>> {
    let guild_id = params.guild_id()?;

    let service = ForumConfigService::new(state.service_context());
    let response = service.get(guild_id).await?;
    Ok(Json(response))
}

/// Create or replace the guild's forum config
///
/// PUT /guilds/{guild_id}/forum
pub async fn upsert_forum_config(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertForumConfigRequest>,
) -> ApiResult<Json<ForumConfigResponse>> {
    let guild_id = params.guild_id()?;

    let service = ForumConfigService::new(state.service_context());
    let response = service.upsert(guild_id, request).await?;
    Ok(Json(response))
}

/// Remove the guild's forum config
///
/// DELETE /guilds/{guild_id}/forum
pub async fn delete_forum_config(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<NoContent> {
    let guild_id = params.guild_id()?;

    let service = ForumConfigService::new(state.service_context());
    service.delete(guild_id).await?;
    Ok(NoContent)
}
