//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! steward-core. Each repository handles database operations for one
//! table; the guild repository additionally owns the transactional
//! cascade that removes a guild and its dependent config rows together.

mod allowed_users_config;
mod error;
mod forum_config;
mod github_config;
mod guild;
mod so_tags_config;
mod user;

pub use allowed_users_config::PgAllowedUsersRepository;
pub use forum_config::PgForumConfigRepository;
pub use github_config::PgGitHubConfigRepository;
pub use guild::PgGuildRepository;
pub use so_tags_config::PgSoTagsRepository;
pub use user::PgUserRepository;
