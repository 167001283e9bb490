//! # steward-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `steward-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Storage codecs for representation-specific columns
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use steward_db::pool::{create_pool, DatabaseConfig};
//! use steward_db::PgGuildRepository;
//! use steward_core::traits::GuildRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let guild_repo = PgGuildRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod storage;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAllowedUsersRepository, PgForumConfigRepository, PgGitHubConfigRepository,
    PgGuildRepository, PgSoTagsRepository, PgUserRepository,
};
pub use storage::RoleListStorage;
