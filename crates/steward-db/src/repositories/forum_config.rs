//! PostgreSQL implementation of ForumConfigRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use steward_core::entities::ForumConfig;
use steward_core::error::DomainError;
use steward_core::traits::{ForumConfigRepository, RepoResult};
use steward_core::value_objects::{ConfigKind, Snowflake};

use crate::models::ForumConfigModel;
use crate::storage;

use super::error::{config_record_not_found, map_db_error, map_fk_violation};

const FORUM_COLUMNS: &str = "id, guild_id, help_forum, help_forum_category, \
     help_thread_auto_close, help_thread_auto_close_days, help_thread_notify, \
     help_thread_notify_roles, help_thread_notify_days, help_thread_sync, \
     showcase_forum, showcase_forum_category, showcase_thread_auto_close, \
     showcase_thread_auto_close_days, created_at, updated_at";

/// PostgreSQL implementation of ForumConfigRepository
///
/// Persists the notify-role list as a native integer array; the storage
/// codec translates at the boundary.
#[derive(Clone)]
pub struct PgForumConfigRepository {
    pool: PgPool,
}

impl PgForumConfigRepository {
    /// Create a new PgForumConfigRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumConfigRepository for PgForumConfigRepository {
    fn kind(&self) -> ConfigKind {
        ConfigKind::Forum
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ForumConfig>> {
        let result = sqlx::query_as::<_, ForumConfigModel>(&format!(
            "SELECT {FORUM_COLUMNS} FROM forum_configs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ForumConfig::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Option<ForumConfig>> {
        let result = sqlx::query_as::<_, ForumConfigModel>(&format!(
            "SELECT {FORUM_COLUMNS} FROM forum_configs WHERE guild_id = $1"
        ))
        .bind(guild_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ForumConfig::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, config: &ForumConfig) -> RepoResult<ForumConfig> {
        let result = sqlx::query_as::<_, ForumConfigModel>(&format!(
            r"
            INSERT INTO forum_configs (id, guild_id, help_forum, help_forum_category,
                                       help_thread_auto_close, help_thread_auto_close_days,
                                       help_thread_notify, help_thread_notify_roles,
                                       help_thread_notify_days, help_thread_sync,
                                       showcase_forum, showcase_forum_category,
                                       showcase_thread_auto_close, showcase_thread_auto_close_days,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (guild_id) DO UPDATE
            SET help_forum = EXCLUDED.help_forum,
                help_forum_category = EXCLUDED.help_forum_category,
                help_thread_auto_close = EXCLUDED.help_thread_auto_close,
                help_thread_auto_close_days = EXCLUDED.help_thread_auto_close_days,
                help_thread_notify = EXCLUDED.help_thread_notify,
                help_thread_notify_roles = EXCLUDED.help_thread_notify_roles,
                help_thread_notify_days = EXCLUDED.help_thread_notify_days,
                help_thread_sync = EXCLUDED.help_thread_sync,
                showcase_forum = EXCLUDED.showcase_forum,
                showcase_forum_category = EXCLUDED.showcase_forum_category,
                showcase_thread_auto_close = EXCLUDED.showcase_thread_auto_close,
                showcase_thread_auto_close_days = EXCLUDED.showcase_thread_auto_close_days,
                updated_at = EXCLUDED.updated_at
            RETURNING {FORUM_COLUMNS}
            "
        ))
        .bind(config.id)
        .bind(config.guild_id.into_inner())
        .bind(config.help_forum)
        .bind(&config.help_forum_category)
        .bind(config.help_thread_auto_close)
        .bind(config.help_thread_auto_close_days)
        .bind(config.help_thread_notify)
        .bind(storage::to_array(&config.help_thread_notify_roles))
        .bind(config.help_thread_notify_days)
        .bind(config.help_thread_sync)
        .bind(config.showcase_forum)
        .bind(&config.showcase_forum_category)
        .bind(config.showcase_thread_auto_close)
        .bind(config.showcase_thread_auto_close_days)
        .bind(config.created_at)
        .bind(config.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |_| DomainError::GuildReferenceMissing(config.guild_id))
        })?;

        Ok(ForumConfig::from(result))
    }

    #[instrument(skip(self))]
    async fn update(&self, config: &ForumConfig) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE forum_configs
            SET help_forum = $2, help_forum_category = $3, help_thread_auto_close = $4,
                help_thread_auto_close_days = $5, help_thread_notify = $6,
                help_thread_notify_roles = $7, help_thread_notify_days = $8,
                help_thread_sync = $9, showcase_forum = $10, showcase_forum_category = $11,
                showcase_thread_auto_close = $12, showcase_thread_auto_close_days = $13,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(config.id)
        .bind(config.help_forum)
        .bind(&config.help_forum_category)
        .bind(config.help_thread_auto_close)
        .bind(config.help_thread_auto_close_days)
        .bind(config.help_thread_notify)
        .bind(storage::to_array(&config.help_thread_notify_roles))
        .bind(config.help_thread_notify_days)
        .bind(config.help_thread_sync)
        .bind(config.showcase_forum)
        .bind(&config.showcase_forum_category)
        .bind(config.showcase_thread_auto_close)
        .bind(config.showcase_thread_auto_close_days)
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
            DELETE FROM forum_configs WHERE id = $1
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
