//! Domain entities - core business objects

mod allowed_users_config;
mod forum_config;
mod github_config;
mod guild;
mod so_tags_config;
mod user;

pub use allowed_users_config::{AllowedUserView, AllowedUsersConfig};
pub use forum_config::ForumConfig;
pub use github_config::GitHubConfig;
pub use guild::Guild;
pub use so_tags_config::{SoTagView, SoTagsConfig};
pub use user::User;
