//! GitHub config model -> entity mapper

use steward_core::entities::GitHubConfig;
use steward_core::value_objects::Snowflake;

use crate::models::GitHubConfigModel;

impl From<GitHubConfigModel> for GitHubConfig {
    fn from(model: GitHubConfigModel) -> Self {
        GitHubConfig {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            discussion_sync: model.discussion_sync,
            github_organization: model.github_organization,
            github_repository: model.github_repository,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
