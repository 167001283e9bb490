//! Forum config service
//!
//! Create-or-update and lookup of a guild's help-forum and showcase-forum
//! settings.

use tracing::{info, instrument};

use steward_core::{ConfigKind, DomainError, ForumConfig, Snowflake};

use crate::dto::{ForumConfigResponse, UpsertForumConfigRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Forum config service
pub struct ForumConfigService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForumConfigService<'a> {
    /// Configuration kind this service is declared to serve
    pub const KIND: ConfigKind = ConfigKind::Forum;

    /// Create a new ForumConfigService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Kind reported by the repository this service is wired to
    pub fn kind(&self) -> ConfigKind {
        self.ctx.forum_repo().kind()
    }

    /// Get the guild's forum config
    #[instrument(skip(self))]
    pub async fn get(&self, guild_id: Snowflake) -> ServiceResult<ForumConfigResponse> {
        let config = self
            .ctx
            .forum_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            })?;

        Ok(ForumConfigResponse::from(&config))
    }

    /// Create the guild's forum config, or update it in place
    #[instrument(skip(self, request))]
    pub async fn upsert(
        &self,
        guild_id: Snowflake,
        request: UpsertForumConfigRequest,
    ) -> ServiceResult<ForumConfigResponse> {
        let mut config = ForumConfig::new(guild_id);
        config.help_forum = request.help_forum;
        config.help_forum_category = request.help_forum_category;
        config.help_thread_auto_close = request.help_thread_auto_close;
        config.help_thread_auto_close_days = request.help_thread_auto_close_days;
        config.help_thread_notify = request.help_thread_notify;
        config.help_thread_notify_roles = request.help_thread_notify_roles;
        config.help_thread_notify_days = request.help_thread_notify_days;
        config.help_thread_sync = request.help_thread_sync;
        config.showcase_forum = request.showcase_forum;
        config.showcase_forum_category = request.showcase_forum_category;
        config.showcase_thread_auto_close = request.showcase_thread_auto_close;
        config.showcase_thread_auto_close_days = request.showcase_thread_auto_close_days;

        let stored = self.ctx.forum_repo().upsert(&config).await?;

        info!(guild_id = %guild_id, "Forum config upserted");

        Ok(ForumConfigResponse::from(&stored))
    }

    /// Remove the guild's forum config
    #[instrument(skip(self))]
    pub async fn delete(&self, guild_id: Snowflake) -> ServiceResult<()> {
        let config = self
            .ctx
            .forum_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            })?;

        self.ctx.forum_repo().delete(config.id).await?;

        info!(guild_id = %guild_id, "Forum config deleted");

        Ok(())
    }
}
