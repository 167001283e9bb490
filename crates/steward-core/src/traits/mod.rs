//! Ports - interfaces the domain expects the infrastructure to provide

mod liveness;
mod repositories;

pub use liveness::BotLiveness;
pub use repositories::{
    AllowedUsersRepository, ForumConfigRepository, GitHubConfigRepository, GuildFilter,
    GuildRepository, GuildSortField, RepoResult, SoTagsRepository, SortOrder, UserRepository,
};
