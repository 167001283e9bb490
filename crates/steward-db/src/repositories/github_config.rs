//! PostgreSQL implementation of GitHubConfigRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use steward_core::entities::GitHubConfig;
use steward_core::error::DomainError;
use steward_core::traits::{GitHubConfigRepository, RepoResult};
use steward_core::value_objects::{ConfigKind, Snowflake};

use crate::models::GitHubConfigModel;

use super::error::{config_record_not_found, map_db_error, map_fk_violation};

/// PostgreSQL implementation of GitHubConfigRepository
#[derive(Clone)]
pub struct PgGitHubConfigRepository {
    pool: PgPool,
}

impl PgGitHubConfigRepository {
    /// Create a new PgGitHubConfigRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GitHubConfigRepository for PgGitHubConfigRepository {
    fn kind(&self) -> ConfigKind {
        ConfigKind::GitHub
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<GitHubConfig>> {
        let result = sqlx::query_as::<_, GitHubConfigModel>(
            r"
            SELECT id, guild_id, discussion_sync, github_organization, github_repository,
                   created_at, updated_at
            FROM github_configs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GitHubConfig::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Option<GitHubConfig>> {
        let result = sqlx::query_as::<_, GitHubConfigModel>(
            r"
            SELECT id, guild_id, discussion_sync, github_organization, github_repository,
                   created_at, updated_at
            FROM github_configs
            WHERE guild_id = $1
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GitHubConfig::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, config: &GitHubConfig) -> RepoResult<GitHubConfig> {
        let result = sqlx::query_as::<_, GitHubConfigModel>(
            r"
            INSERT INTO github_configs (id, guild_id, discussion_sync, github_organization,
                                        github_repository, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (guild_id) DO UPDATE
            SET discussion_sync = EXCLUDED.discussion_sync,
                github_organization = EXCLUDED.github_organization,
                github_repository = EXCLUDED.github_repository,
                updated_at = EXCLUDED.updated_at
            RETURNING id, guild_id, discussion_sync, github_organization, github_repository,
                      created_at, updated_at
            ",
        )
        .bind(config.id)
        .bind(config.guild_id.into_inner())
        .bind(config.discussion_sync)
        .bind(&config.github_organization)
        .bind(&config.github_repository)
        .bind(config.created_at)
        .bind(config.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |_| DomainError::GuildReferenceMissing(config.guild_id))
        })?;

        Ok(GitHubConfig::from(result))
    }

    #[instrument(skip(self))]
    async fn update(&self, config: &GitHubConfig) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE github_configs
            SET discussion_sync = $2, github_organization = $3, github_repository = $4,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(config.id)
        .bind(config.discussion_sync)
        .bind(&config.github_organization)
        .bind(&config.github_repository)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(config_record_not_found(self.kind(), config.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM github_configs WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(config_record_not_found(self.kind(), id));
        }

        Ok(())
    }
}
