//! GitHub config service
//!
//! Create-or-update and lookup of a guild's GitHub integration settings.

use tracing::{info, instrument};

use steward_core::{ConfigKind, DomainError, GitHubConfig, Snowflake};

use crate::dto::{GitHubConfigResponse, UpsertGitHubConfigRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// GitHub config service
pub struct GitHubConfigService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GitHubConfigService<'a> {
    /// Configuration kind this service is declared to serve
    pub const KIND: ConfigKind = ConfigKind::GitHub;

    /// Create a new GitHubConfigService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Kind reported by the repository this service is wired to
    pub fn kind(&self) -> ConfigKind {
        self.ctx.github_repo().kind()
    }

    /// Get the guild's GitHub config
    #[instrument(skip(self))]
    pub async fn get(&self, guild_id: Snowflake) -> ServiceResult<GitHubConfigResponse> {
        let config = self
            .ctx
            .github_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            })?;

        Ok(GitHubConfigResponse::from(&config))
    }

    /// Create the guild's GitHub config, or update it in place
    ///
    /// The stored row keeps its record id across repeated upserts; a
    /// missing guild surfaces as a referential error and writes nothing.
    #[instrument(skip(self, request))]
    pub async fn upsert(
        &self,
        guild_id: Snowflake,
        request: UpsertGitHubConfigRequest,
    ) -> ServiceResult<GitHubConfigResponse> {
        let mut config = GitHubConfig::new(guild_id);
        config.set_discussion_sync(request.discussion_sync);
        config.set_target(request.github_organization, request.github_repository);

        let stored = self.ctx.github_repo().upsert(&config).await?;

        info!(guild_id = %guild_id, "GitHub config upserted");

        Ok(GitHubConfigResponse::from(&stored))
    }

    /// Remove the guild's GitHub config
    #[instrument(skip(self))]
    pub async fn delete(&self, guild_id: Snowflake) -> ServiceResult<()> {
        let config = self
            .ctx
            .github_repo()
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            })?;

        self.ctx.github_repo().delete(config.id).await?;

        info!(guild_id = %guild_id, "GitHub config deleted");

        Ok(())
    }
}
