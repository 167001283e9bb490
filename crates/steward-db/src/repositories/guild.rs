//! PostgreSQL implementation of GuildRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use steward_core::entities::Guild;
use steward_core::error::DomainError;
use steward_core::traits::{GuildFilter, GuildRepository, GuildSortField, RepoResult, SortOrder};
use steward_core::value_objects::Snowflake;

use crate::models::GuildModel;

use super::error::{guild_record_not_found, map_db_error, map_unique_violation};

const GUILD_COLUMNS: &str = "id, guild_id, guild_name, prefix, help_channel_id, \
     showcase_channel_id, sync_label, issue_linking, comment_linking, doc_linking, \
     created_at, updated_at";

/// PostgreSQL implementation of GuildRepository
#[derive(Clone)]
pub struct PgGuildRepository {
    pool: PgPool,
}

impl PgGuildRepository {
    /// Create a new PgGuildRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the filter's WHERE clauses to a partially built query
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &GuildFilter) {
    qb.push(" WHERE TRUE");

    if let Some(search) = &filter.search {
        qb.push(" AND guild_name ILIKE ")
            .push_bind(format!("%{search}%"));
    }
    if let Some(after) = filter.created_after {
        qb.push(" AND created_at >= ").push_bind(after);
    }
    if let Some(before) = filter.created_before {
        qb.push(" AND created_at <= ").push_bind(before);
    }
    if let Some(after) = filter.updated_after {
        qb.push(" AND updated_at >= ").push_bind(after);
    }
    if let Some(before) = filter.updated_before {
        qb.push(" AND updated_at <= ").push_bind(before);
    }
}

fn sort_column(field: GuildSortField) -> &'static str {
    match field {
        GuildSortField::CreatedAt => "created_at",
        GuildSortField::UpdatedAt => "updated_at",
        GuildSortField::GuildName => "guild_name",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

#[async_trait]
impl GuildRepository for PgGuildRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Guild>> {
        let result = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT id, guild_id, guild_name, prefix, help_channel_id, showcase_channel_id,
                   sync_label, issue_linking, comment_linking, doc_linking, created_at, updated_at
            FROM guilds
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Guild::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Option<Guild>> {
        let result = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT id, guild_id, guild_name, prefix, help_channel_id, showcase_channel_id,
                   sync_label, issue_linking, comment_linking, doc_linking, created_at, updated_at
            FROM guilds
            WHERE guild_id = $1
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Guild::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &GuildFilter) -> RepoResult<(Vec<Guild>, i64)> {
        // The caller should have clamped already; out-of-range values are
        // bounded here too rather than passed to Postgres.
        let clamped = filter.clone().clamped();
        let (limit, offset) = (clamped.limit, clamped.offset);

        let mut query =
            QueryBuilder::<Postgres>::new(format!("SELECT {GUILD_COLUMNS} FROM guilds"));
        push_filters(&mut query, filter);
        query
            .push(format!(
                " ORDER BY {} {}",
                sort_column(filter.sort_by),
                sort_direction(filter.order)
            ))
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let models = query
            .build_query_as::<GuildModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM guilds");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok((models.into_iter().map(Guild::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM guilds
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, guild: &Guild) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO guilds (id, guild_id, guild_name, prefix, help_channel_id,
                                showcase_channel_id, sync_label, issue_linking,
                                comment_linking, doc_linking, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(guild.id)
        .bind(guild.guild_id.into_inner())
        .bind(&guild.guild_name)
        .bind(&guild.prefix)
        .bind(guild.help_channel_id.map(Snowflake::into_inner))
        .bind(guild.showcase_channel_id.map(Snowflake::into_inner))
        .bind(&guild.sync_label)
        .bind(guild.issue_linking)
        .bind(guild.comment_linking)
        .bind(guild.doc_linking)
        .bind(guild.created_at)
        .bind(guild.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GuildAlreadyExists(guild.guild_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, guild: &Guild) -> RepoResult<()> {
        // guild_id is platform-assigned and never part of the SET list
        let result = sqlx::query(
            r"
            UPDATE guilds
            SET guild_name = $2, prefix = $3, help_channel_id = $4, showcase_channel_id = $5,
                sync_label = $6, issue_linking = $7, comment_linking = $8, doc_linking = $9,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(guild.id)
        .bind(&guild.guild_name)
        .bind(&guild.prefix)
        .bind(guild.help_channel_id.map(Snowflake::into_inner))
        .bind(guild.showcase_channel_id.map(Snowflake::into_inner))
        .bind(&guild.sync_label)
        .bind(guild.issue_linking)
        .bind(guild.comment_linking)
        .bind(guild.doc_linking)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guild_record_not_found(guild.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let guild_id = sqlx::query_scalar::<_, i64>(
            r"
            SELECT guild_id FROM guilds WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| guild_record_not_found(id))?;

        // Dependents go first, the guild row last; the foreign keys carry
        // no ON DELETE action.
        sqlx::query(
            r"
            DELETE FROM allowed_users_configs WHERE guild_id = $1
            ",
        )
        .bind(guild_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM so_tags_configs WHERE guild_id = $1
            ",
        )
        .bind(guild_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM forum_configs WHERE guild_id = $1
            ",
        )
        .bind(guild_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM github_configs WHERE guild_id = $1
            ",
        )
        .bind(guild_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM guilds WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGuildRepository>();
    }

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column(GuildSortField::CreatedAt), "created_at");
        assert_eq!(sort_column(GuildSortField::UpdatedAt), "updated_at");
        assert_eq!(sort_column(GuildSortField::GuildName), "guild_name");
        assert_eq!(sort_direction(SortOrder::Asc), "ASC");
        assert_eq!(sort_direction(SortOrder::Desc), "DESC");
    }
}
