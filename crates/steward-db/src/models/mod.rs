//! Database models - SQLx-compatible structs for PostgreSQL tables

mod allowed_users_config;
mod forum_config;
mod github_config;
mod guild;
mod so_tags_config;
mod user;

pub use allowed_users_config::{AllowedUserViewModel, AllowedUsersConfigModel};
pub use forum_config::ForumConfigModel;
pub use github_config::GitHubConfigModel;
pub use guild::GuildModel;
pub use so_tags_config::{SoTagViewModel, SoTagsConfigModel};
pub use user::UserModel;
