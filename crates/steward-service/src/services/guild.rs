//! Guild service
//!
//! Handles guild creation, lookup, listing, partial update, and the
//! cascading delete of a guild and its dependent configs.

use chrono::Utc;
use tracing::{info, instrument};

use steward_core::{DomainError, Guild, GuildFilter, Snowflake};

use crate::dto::{CreateGuildRequest, GuildResponse, PaginatedResponse, UpdateGuildRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Guild service
pub struct GuildService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildService<'a> {
    /// Create a new GuildService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new guild
    #[instrument(skip(self, request))]
    pub async fn create_guild(&self, request: CreateGuildRequest) -> ServiceResult<GuildResponse> {
        // Fast path for the common duplicate; the unique constraint still
        // decides races between concurrent creators.
        if self
            .ctx
            .guild_repo()
            .find_by_guild_id(request.guild_id)
            .await?
            .is_some()
        {
            return Err(DomainError::GuildAlreadyExists(request.guild_id).into());
        }

        let mut guild = Guild::new(request.guild_id, request.guild_name);
        if let Some(prefix) = request.prefix {
            guild.prefix = prefix;
        }
        guild.help_channel_id = request.help_channel_id;
        guild.showcase_channel_id = request.showcase_channel_id;
        guild.sync_label = request.sync_label;
        guild.issue_linking = request.issue_linking;
        guild.comment_linking = request.comment_linking;
        guild.doc_linking = request.doc_linking;

        self.ctx.guild_repo().create(&guild).await?;

        info!(guild_id = %guild.guild_id, "Guild created");

        Ok(GuildResponse::from(&guild))
    }

    /// Get a guild by its platform-assigned ID
    #[instrument(skip(self))]
    pub async fn get_guild(&self, guild_id: Snowflake) -> ServiceResult<GuildResponse> {
        let guild = self
            .ctx
            .guild_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::GuildNotFound(guild_id))?;

        Ok(GuildResponse::from(&guild))
    }

    /// List guilds matching the filter, with pagination metadata
    #[instrument(skip(self, filter))]
    pub async fn list_guilds(
        &self,
        filter: GuildFilter,
    ) -> ServiceResult<PaginatedResponse<GuildResponse>> {
        let filter = filter.clamped();
        let (guilds, total) = self.ctx.guild_repo().list(&filter).await?;

        let items = guilds.iter().map(GuildResponse::from).collect();
        Ok(PaginatedResponse::new(
            items,
            total,
            filter.limit,
            filter.offset,
        ))
    }

    /// Update guild settings
    ///
    /// Fields absent from the request are left unchanged; `guild_id` is
    /// immutable.
    #[instrument(skip(self, request))]
    pub async fn update_guild(
        &self,
        guild_id: Snowflake,
        request: UpdateGuildRequest,
    ) -> ServiceResult<GuildResponse> {
        let mut guild = self
            .ctx
            .guild_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::GuildNotFound(guild_id))?;

        let mut changed = false;

        if let Some(guild_name) = request.guild_name {
            guild.guild_name = guild_name;
            changed = true;
        }

        if let Some(prefix) = request.prefix {
            guild.prefix = prefix;
            changed = true;
        }

        if let Some(channel_id) = request.help_channel_id {
            guild.help_channel_id = Some(channel_id);
            changed = true;
        }

        if let Some(channel_id) = request.showcase_channel_id {
            guild.showcase_channel_id = Some(channel_id);
            changed = true;
        }

        if let Some(sync_label) = request.sync_label {
            guild.sync_label = Some(sync_label);
            changed = true;
        }

        if let Some(enabled) = request.issue_linking {
            guild.issue_linking = enabled;
            changed = true;
        }

        if let Some(enabled) = request.comment_linking {
            guild.comment_linking = enabled;
            changed = true;
        }

        if let Some(enabled) = request.doc_linking {
            guild.doc_linking = enabled;
            changed = true;
        }

        if changed {
            guild.updated_at = Utc::now();
            self.ctx.guild_repo().update(&guild).await?;

            info!(guild_id = %guild_id, "Guild updated");
        }

        Ok(GuildResponse::from(&guild))
    }

    /// Delete a guild and every dependent config row
    #[instrument(skip(self))]
    pub async fn delete_guild(&self, guild_id: Snowflake) -> ServiceResult<()> {
        let guild = self
            .ctx
            .guild_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::GuildNotFound(guild_id))?;

        self.ctx.guild_repo().delete(guild.id).await?;

        info!(guild_id = %guild_id, "Guild deleted with all dependent configs");

        Ok(())
    }
}
