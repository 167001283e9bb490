//! GitHub configuration - per-guild GitHub integration settings

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// GitHub integration settings for one guild (at most one row per guild)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub discussion_sync: bool,
    pub github_organization: Option<String>,
    pub github_repository: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GitHubConfig {
    /// Create a new config with discussion sync disabled
    pub fn new(guild_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guild_id,
            discussion_sync: false,
            github_organization: None,
            github_repository: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Toggle discussion sync
    pub fn set_discussion_sync(&mut self, enabled: bool) {
        self.discussion_sync = enabled;
        self.updated_at = Utc::now();
    }

    /// Point the config at an organization/repository pair
    pub fn set_target(&mut self, organization: Option<String>, repository: Option<String>) {
        self.github_organization = organization;
        self.github_repository = repository;
        self.updated_at = Utc::now();
    }

    /// Bump the modification timestamp after direct field edits
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_config_defaults() {
        let config = GitHubConfig::new(Snowflake::new(42));
        assert_eq!(config.guild_id, Snowflake::new(42));
        assert!(!config.discussion_sync);
        assert!(config.github_organization.is_none());
        assert!(config.github_repository.is_none());
    }

    #[test]
    fn test_set_target() {
        let mut config = GitHubConfig::new(Snowflake::new(1));
        config.set_target(Some("acme".to_string()), Some("widgets".to_string()));
        assert_eq!(config.github_organization.as_deref(), Some("acme"));
        assert_eq!(config.github_repository.as_deref(), Some("widgets"));
    }

    #[test]
    fn test_set_discussion_sync() {
        let mut config = GitHubConfig::new(Snowflake::new(1));
        config.set_discussion_sync(true);
        assert!(config.discussion_sync);
    }
}
