//! Stack Overflow tags service
//!
//! Manages the set of tags a guild tracks for new questions.

use tracing::{info, instrument};

use steward_core::{ConfigKind, DomainError, Snowflake, SoTagsConfig};

use crate::dto::{SoTagResponse, SoTagViewResponse, UpsertSoTagRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stack Overflow tags service
pub struct SoTagsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SoTagsService<'a> {
    /// Configuration kind this service is declared to serve
    pub const KIND: ConfigKind = ConfigKind::SoTags;

    /// Create a new SoTagsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Kind reported by the repository this service is wired to
    pub fn kind(&self) -> ConfigKind {
        self.ctx.so_tags_repo().kind()
    }

    /// All tags tracked by the guild, joined with the guild name
    ///
    /// A guild with nothing configured reads as not-found, matching the
    /// single-row config kinds.
    #[instrument(skip(self))]
    pub async fn get_tags(&self, guild_id: Snowflake) -> ServiceResult<Vec<SoTagViewResponse>> {
        let rows = self.ctx.so_tags_repo().find_by_guild_id(guild_id).await?;
        if rows.is_empty() {
            return Err(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            }
            .into());
        }

        Ok(rows.iter().map(SoTagViewResponse::from).collect())
    }

    /// Track a tag for the guild, or refresh the existing row
    #[instrument(skip(self, request))]
    pub async fn add_tag(
        &self,
        guild_id: Snowflake,
        request: UpsertSoTagRequest,
    ) -> ServiceResult<SoTagResponse> {
        let tag = SoTagsConfig::new(guild_id, request.tag_name);
        let stored = self.ctx.so_tags_repo().upsert(&tag).await?;

        info!(guild_id = %guild_id, tag_name = %stored.tag_name, "Tag tracked");

        Ok(SoTagResponse::from(&stored))
    }

    /// Stop tracking one of the guild's tags
    #[instrument(skip(self))]
    pub async fn remove_tag(&self, guild_id: Snowflake, tag_name: &str) -> ServiceResult<()> {
        let rows = self.ctx.so_tags_repo().find_by_guild_id(guild_id).await?;
        let row = rows
            .iter()
            .find(|row| row.tag_name == tag_name)
            .ok_or(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            })?;

        self.ctx.so_tags_repo().delete(row.id).await?;

        info!(guild_id = %guild_id, tag_name = %tag_name, "Tag untracked");

        Ok(())
    }
}
