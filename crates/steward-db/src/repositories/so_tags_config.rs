//! PostgreSQL implementation of SoTagsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use steward_core::entities::{SoTagView, SoTagsConfig};
use steward_core::error::DomainError;
use steward_core::traits::{RepoResult, SoTagsRepository};
use steward_core::value_objects::{ConfigKind, Snowflake};

use crate::models::{SoTagViewModel, SoTagsConfigModel};

use super::error::{config_record_not_found, map_db_error, map_fk_violation};

/// PostgreSQL implementation of SoTagsRepository
#[derive(Clone)]
pub struct PgSoTagsRepository {
    pool: PgPool,
}

impl PgSoTagsRepository {
    /// Create a new PgSoTagsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SoTagsRepository for PgSoTagsRepository {
    fn kind(&self) -> ConfigKind {
        ConfigKind::SoTags
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SoTagsConfig>> {
        let result = sqlx::query_as::<_, SoTagsConfigModel>(
            r"
            SELECT id, guild_id, tag_name, created_at, updated_at
            FROM so_tags_configs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SoTagsConfig::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Vec<SoTagView>> {
        let results = sqlx::query_as::<_, SoTagViewModel>(
            r"
            SELECT t.id, t.guild_id, g.guild_name, t.tag_name, t.created_at, t.updated_at
            FROM so_tags_configs t
            JOIN guilds g ON g.guild_id = t.guild_id
            WHERE t.guild_id = $1
            ORDER BY t.tag_name
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SoTagView::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, tag: &SoTagsConfig) -> RepoResult<SoTagsConfig> {
        let result = sqlx::query_as::<_, SoTagsConfigModel>(
            r"
            INSERT INTO so_tags_configs (id, guild_id, tag_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (guild_id, tag_name) DO UPDATE
            SET updated_at = EXCLUDED.updated_at
            RETURNING id, guild_id, tag_name, created_at, updated_at
            ",
        )
        .bind(tag.id)
        .bind(tag.guild_id.into_inner())
        .bind(&tag.tag_name)
        .bind(tag.created_at)
        .bind(tag.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, |_| DomainError::GuildReferenceMissing(tag.guild_id)))?;

        Ok(SoTagsConfig::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM so_tags_configs WHERE id = $1
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
