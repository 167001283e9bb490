//! Stack Overflow tag handlers
//!
//! Endpoints for the per-guild tracked tag list.

use axum::{
    extract::{Path, State},
    Json,
};
use steward_service::dto::{SoTagResponse, SoTagViewResponse, UpsertSoTagRequest};
use steward_service::services::SoTagsService;

use crate::extractors::{GuildIdPath, GuildTagPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List the guild's tracked tags
///
/// GET /guilds/{guild_id}/sotags
pub async fn get_so_tags(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<Json<Vec<SoTagViewResponse>>> {
    let guild_id = params.guild_id()?;

    let service = SoTagsService::new(state.service_context());
    let response = service.get_tags(guild_id).await?;
    Ok(Json(response))
}

/// Track a tag for the guild
///
/// PUT /guilds/{guild_id}/sotags
pub async fn upsert_so_tag(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertSoTagRequest>,
) -> ApiResult<Json<SoTagResponse>> {
    let guild_id = params.guild_id()?;

    let service = SoTagsService::new(state.service_context());
    let response = service.add_tag(guild_id, request).await?;
    Ok(Json(response))
}

/// Stop tracking one of the guild's tags
///
/// DELETE /guilds/{guild_id}/sotags/{tag_name}
pub async fn delete_so_tag(
    State(state): State<AppState>,
    Path(params): Path<GuildTagPath>,
) -> ApiResult<NoContent> {
    let guild_id = params.guild_id()?;

    let service = SoTagsService::new(state.service_context());
    service.remove_tag(guild_id, params.tag_name()).await?;
    Ok(NoContent)
}
