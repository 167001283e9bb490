//! # steward-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! bot-liveness port. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AllowedUserView, AllowedUsersConfig, ForumConfig, GitHubConfig, Guild, SoTagView,
    SoTagsConfig, User,
};
pub use error::DomainError;
pub use traits::{
    AllowedUsersRepository, BotLiveness, ForumConfigRepository, GitHubConfigRepository,
    GuildFilter, GuildRepository, GuildSortField, RepoResult, SoTagsRepository, SortOrder,
    UserRepository,
};
pub use value_objects::{ConfigKind, ServiceStatus, Snowflake, SnowflakeParseError};
