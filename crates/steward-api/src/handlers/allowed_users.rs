//! Allowed user handlers
//!
//! Endpoints for the per-guild allowed user list.

use axum::{
    extract::{Path, State},
    Json,
};
use steward_service::dto::{AllowedUserResponse, UpsertAllowedUserRequest};
use steward_service::services::AllowedUsersService;

use crate::extractors::{GuildIdPath, GuildUserPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List the guild's allowed users with their profile fields
///
/// GET /guilds/{guild_id}/allowed-users
pub async fn get_allowed_users(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
) -> ApiResult<Json<Vec<AllowedUserResponse>>> {
    let guild_id = params.guild_id()?;

    let service = AllowedUsersService::new(state.service_context());
    let response = service.get_users(guild_id).await?;
    Ok(Json(response))
}

/// Allow a user in the guild, resolving the profile by tag
///
/// PUT /guilds/{guild_id}/allowed-users
pub async fn upsert_allowed_user(
    State(state): State<AppState>,
    Path(params): Path<GuildIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertAllowedUserRequest>,
) -> ApiResult<Json<AllowedUserResponse>> {
    let guild_id = params.guild_id()?;

    let service = AllowedUsersService::new(state.service_context());
    let response = service.allow_user(guild_id, request).await?;
    Ok(Json(response))
}

/// Revoke a user's access in the guild
///
/// DELETE /guilds/{guild_id}/allowed-users/{user_id}
pub async fn delete_allowed_user(
    State(state): State<AppState>,
    Path(params): Path<GuildUserPath>,
) -> ApiResult<NoContent> {
    let guild_id = params.guild_id()?;
    let user_id = params.user_id()?;

    let service = AllowedUsersService::new(state.service_context());
    service.disallow_user(guild_id, user_id).await?;
    Ok(NoContent)
}
