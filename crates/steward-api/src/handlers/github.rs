//! GitHub config handlers
//!
//! Endpoints for the per-guild GitHub integration settings.

use axum::{
    extract::{Path, State},
    Json,
};
use steward_service::dto::{GitHubConfigResponse, UpsertGitHubConfigRequest};
use steward_service::services::GitHubConfigService;

use crate::extractors::{GuildIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the guild's GitHub config
///
/// GET /guilds/{guild_id}/github
pub async fn get_github_config(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<Json<GitHubConfigResponse>> {
    let guild_id = params.guild_id()?;

    let service = GitHubConfigService::new(state.service_context());
    let response = service.get(guild_id).await?;
    Ok(Json(response))
}

/// Create or replace the guild's GitHub config
///
/// PUT /guilds/{guild_id}/github
pub async fn upsert_github_config(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertGitHubConfigRequest>,
) -> ApiResult<Json<GitHubConfigResponse>> {
    let guild_id = params.guild_id()?;

    let service = GitHubConfigService::new(state.service_context());
    let response = service.upsert(guild_id, request).await?;
    Ok(Json(response))
}

/// Remove the guild's GitHub config
///
/// DELETE /guilds/{guild_id}/github
pub async fn delete_github_config(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<NoContent> {
    let guild_id = params.guild_id()?;

    let service = GitHubConfigService::new(state.service_context());
    service.delete(guild_id).await?;
    Ok(NoContent)
}
