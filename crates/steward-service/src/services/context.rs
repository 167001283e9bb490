//! Service context - dependency container for services
//!
//! Holds the database pool, the repository ports, and the bot-liveness
//! source every service needs.

use std::sync::Arc;

use steward_core::traits::{
    AllowedUsersRepository, BotLiveness, ForumConfigRepository, GitHubConfigRepository,
    GuildRepository, SoTagsRepository, UserRepository,
};
use steward_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The PostgreSQL pool (health probes run their own round trips)
/// - The guild and configuration repositories
/// - The user repository backing the allowed-users flow
/// - The bot-liveness source feeding health and dashboard reads
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    guild_repo: Arc<dyn GuildRepository>,
    github_repo: Arc<dyn GitHubConfigRepository>,
    forum_repo: Arc<dyn ForumConfigRepository>,
    so_tags_repo: Arc<dyn SoTagsRepository>,
    allowed_users_repo: Arc<dyn AllowedUsersRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Liveness source
    bot_liveness: Arc<dyn BotLiveness>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        guild_repo: Arc<dyn GuildRepository>,
        github_repo: Arc<dyn GitHubConfigRepository>,
        forum_repo: Arc<dyn ForumConfigRepository>,
        so_tags_repo: Arc<dyn SoTagsRepository>,
        allowed_users_repo: Arc<dyn AllowedUsersRepository>,
        user_repo: Arc<dyn UserRepository>,
        bot_liveness: Arc<dyn BotLiveness>,
    ) -> Self {
        Self {
            pool,
            guild_repo,
            github_repo,
            forum_repo,
            so_tags_repo,
            allowed_users_repo,
            user_repo,
            bot_liveness,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the guild repository
    pub fn guild_repo(&self) -> &dyn GuildRepository {
        self.guild_repo.as_ref()
    }

    /// Get the GitHub config repository
    pub fn github_repo(&self) -> &dyn GitHubConfigRepository {
        self.github_repo.as_ref()
    }

    /// Get the forum config repository
    pub fn forum_repo(&self) -> &dyn ForumConfigRepository {
        self.forum_repo.as_ref()
    }

    /// Get the Stack Overflow tags repository
    pub fn so_tags_repo(&self) -> &dyn SoTagsRepository {
        self.so_tags_repo.as_ref()
    }

    /// Get the allowed-users repository
    pub fn allowed_users_repo(&self) -> &dyn AllowedUsersRepository {
        self.allowed_users_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Liveness ===

    /// Get the bot-liveness source
    pub fn bot_liveness(&self) -> &dyn BotLiveness {
        self.bot_liveness.as_ref()
    }

    // === Shared handles for long-lived tasks ===

    /// Shared handle to the guild repository, for tasks that outlive a request
    pub fn guild_repo_handle(&self) -> Arc<dyn GuildRepository> {
        self.guild_repo.clone()
    }

    /// Shared handle to the liveness source, for tasks that outlive a request
    pub fn bot_liveness_handle(&self) -> Arc<dyn BotLiveness> {
        self.bot_liveness.clone()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("bot_liveness", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    guild_repo: Option<Arc<dyn GuildRepository>>,
    github_repo: Option<Arc<dyn GitHubConfigRepository>>,
    forum_repo: Option<Arc<dyn ForumConfigRepository>>,
    so_tags_repo: Option<Arc<dyn SoTagsRepository>>,
    allowed_users_repo: Option<Arc<dyn AllowedUsersRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    bot_liveness: Option<Arc<dyn BotLiveness>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            guild_repo: None,
            github_repo: None,
            forum_repo: None,
            so_tags_repo: None,
            allowed_users_repo: None,
            user_repo: None,
            bot_liveness: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn guild_repo(mut self, repo: Arc<dyn GuildRepository>) -> Self {
        self.guild_repo = Some(repo);
        self
    }

    pub fn github_repo(mut self, repo: Arc<dyn GitHubConfigRepository>) -> Self {
        self.github_repo = Some(repo);
        self
    }

    pub fn forum_repo(mut self, repo: Arc<dyn ForumConfigRepository>) -> Self {
        self.forum_repo = Some(repo);
        self
    }

    pub fn so_tags_repo(mut self, repo: Arc<dyn SoTagsRepository>) -> Self {
        self.so_tags_repo = Some(repo);
        self
    }

    pub fn allowed_users_repo(mut self, repo: Arc<dyn AllowedUsersRepository>) -> Self {
        self.allowed_users_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn bot_liveness(mut self, liveness: Arc<dyn BotLiveness>) -> Self {
        self.bot_liveness = Some(liveness);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.guild_repo
                .ok_or_else(|| super::error::ServiceError::validation("guild_repo is required"))?,
            self.github_repo
                .ok_or_else(|| super::error::ServiceError::validation("github_repo is required"))?,
            self.forum_repo
                .ok_or_else(|| super::error::ServiceError::validation("forum_repo is required"))?,
            self.so_tags_repo
                .ok_or_else(|| super::error::ServiceError::validation("so_tags_repo is required"))?,
            self.allowed_users_repo.ok_or_else(|| {
                super::error::ServiceError::validation("allowed_users_repo is required")
            })?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.bot_liveness
                .ok_or_else(|| super::error::ServiceError::validation("bot_liveness is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
