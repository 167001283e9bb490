//! PostgreSQL implementation of AllowedUsersRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use steward_core::entities::{AllowedUserView, AllowedUsersConfig};
use steward_core::error::DomainError;
use steward_core::traits::{AllowedUsersRepository, RepoResult};
use steward_core::value_objects::{ConfigKind, Snowflake};

use crate::models::{AllowedUserViewModel, AllowedUsersConfigModel};

use super::error::{config_record_not_found, map_db_error, map_fk_violation};

/// PostgreSQL implementation of AllowedUsersRepository
#[derive(Clone)]
pub struct PgAllowedUsersRepository {
    pool: PgPool,
}

impl PgAllowedUsersRepository {
    /// Create a new PgAllowedUsersRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AllowedUsersRepository for PgAllowedUsersRepository {
    fn kind(&self) -> ConfigKind {
        ConfigKind::AllowedUsers
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AllowedUsersConfig>> {
        let result = sqlx::query_as::<_, AllowedUsersConfigModel>(
            r"
            SELECT id, guild_id, user_id, created_at, updated_at
            FROM allowed_users_configs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AllowedUsersConfig::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Vec<AllowedUserView>> {
        let results = sqlx::query_as::<_, AllowedUserViewModel>(
            r"
            SELECT a.id, a.guild_id, a.user_id, u.name AS user_name, u.discriminator,
                   u.avatar_url, a.created_at, a.updated_at
            FROM allowed_users_configs a
            JOIN users u ON u.id = a.user_id
            WHERE a.guild_id = $1
            ORDER BY a.created_at
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AllowedUserView::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, entry: &AllowedUsersConfig) -> RepoResult<AllowedUsersConfig> {
        let result = sqlx::query_as::<_, AllowedUsersConfigModel>(
            r"
            INSERT INTO allowed_users_configs (id, guild_id, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (guild_id, user_id) DO UPDATE
            SET updated_at = EXCLUDED.updated_at
            RETURNING id, guild_id, user_id, created_at, updated_at
            ",
        )
        .bind(entry.id)
        .bind(entry.guild_id.into_inner())
        .bind(entry.user_id)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| match constraint {
                Some("fk_allowed_users_configs_user") => {
                    DomainError::UserReferenceMissing(entry.user_id)
                }
                _ => DomainError::GuildReferenceMissing(entry.guild_id),
            })
        })?;

        Ok(AllowedUsersConfig::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM allowed_users_configs WHERE id = $1
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
