//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Configuration repositories additionally
//! report the `ConfigKind` they serve so the service layer can verify its
//! wiring.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    AllowedUserView, AllowedUsersConfig, ForumConfig, GitHubConfig, Guild, SoTagView,
    SoTagsConfig, User,
};
use crate::error::DomainError;
use crate::value_objects::{ConfigKind, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guild Repository
// ============================================================================

/// Sortable guild list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuildSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    GuildName,
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Pagination and filter options for guild list queries
#[derive(Debug, Clone)]
pub struct GuildFilter {
    pub limit: i64,
    pub offset: i64,
    pub search: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub updated_after: Option<DateTime<Utc>>,
    pub updated_before: Option<DateTime<Utc>>,
    pub sort_by: GuildSortField,
    pub order: SortOrder,
}

impl GuildFilter {
    /// Default page size when the caller supplies none
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Largest page a single query may return
    pub const MAX_LIMIT: i64 = 100;

    /// Force limit and offset into their allowed ranges
    pub fn clamped(mut self) -> Self {
        self.limit = self.limit.clamp(1, Self::MAX_LIMIT);
        self.offset = self.offset.max(0);
        self
    }
}

impl Default for GuildFilter {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
            search: None,
            created_after: None,
            created_before: None,
            updated_after: None,
            updated_before: None,
            sort_by: GuildSortField::default(),
            order: SortOrder::default(),
        }
    }
}

#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// Find guild by record ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Guild>>;

    /// Find guild by its platform-assigned external ID
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Option<Guild>>;

    /// List guilds matching the filter, returning the page and the total count
    async fn list(&self, filter: &GuildFilter) -> RepoResult<(Vec<Guild>, i64)>;

    /// Count all guilds
    async fn count(&self) -> RepoResult<i64>;

    /// Create a new guild; fails with a conflict if the external ID is taken
    async fn create(&self, guild: &Guild) -> RepoResult<()>;

    /// Update an existing guild
    async fn update(&self, guild: &Guild) -> RepoResult<()>;

    /// Delete a guild and every dependent config row in one transaction
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// GitHub Config Repository
// ============================================================================

#[async_trait]
pub trait GitHubConfigRepository: Send + Sync {
    /// The configuration kind this repository serves
    fn kind(&self) -> ConfigKind;

    /// Find config by record ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<GitHubConfig>>;

    /// Find the guild's config
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Option<GitHubConfig>>;

    /// Insert the config, or update the guild's existing row in place
    async fn upsert(&self, config: &GitHubConfig) -> RepoResult<GitHubConfig>;

    /// Update an existing config by record ID
    async fn update(&self, config: &GitHubConfig) -> RepoResult<()>;

    /// Delete a config by record ID
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Forum Config Repository
// ============================================================================

#[async_trait]
pub trait ForumConfigRepository: Send + Sync {
    /// The configuration kind this repository serves
    fn kind(&self) -> ConfigKind;

    /// Find config by record ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ForumConfig>>;

    /// Find the guild's config
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Option<ForumConfig>>;

    /// Insert the config, or update the guild's existing row in place
    async fn upsert(&self, config: &ForumConfig) -> RepoResult<ForumConfig>;

    /// Update an existing config by record ID
    async fn update(&self, config: &ForumConfig) -> RepoResult<()>;

    /// Delete a config by record ID
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Stack Overflow Tags Repository
// ============================================================================

#[async_trait]
pub trait SoTagsRepository: Send + Sync {
    /// The configuration kind this repository serves
    fn kind(&self) -> ConfigKind;

    /// Find tag row by record ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SoTagsConfig>>;

    /// All tags tracked by a guild, joined with the guild name
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Vec<SoTagView>>;

    /// Insert the tag, or refresh the existing `(guild, tag)` row
    async fn upsert(&self, tag: &SoTagsConfig) -> RepoResult<SoTagsConfig>;

    /// Delete a tag row by record ID
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Allowed Users Repository
// ============================================================================

#[async_trait]
pub trait AllowedUsersRepository: Send + Sync {
    /// The configuration kind this repository serves
    fn kind(&self) -> ConfigKind;

    /// Find association by record ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AllowedUsersConfig>>;

    /// All allowed users for a guild, joined with user profile fields
    async fn find_by_guild_id(&self, guild_id: Snowflake) -> RepoResult<Vec<AllowedUserView>>;

    /// Insert the association, or refresh the existing `(guild, user)` row
    async fn upsert(&self, entry: &AllowedUsersConfig) -> RepoResult<AllowedUsersConfig>;

    /// Delete an association by record ID
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by record ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by name and discriminator
    async fn find_by_tag(&self, name: &str, discriminator: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;
}
