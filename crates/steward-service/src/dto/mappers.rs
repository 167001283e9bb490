//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use steward_core::entities::{
    AllowedUserView, AllowedUsersConfig, ForumConfig, GitHubConfig, Guild, SoTagView,
    SoTagsConfig, User,
};

use super::responses::{
    AllowedUserResponse, ForumConfigResponse, GitHubConfigResponse, GuildResponse, SoTagResponse,
    SoTagViewResponse,
};

// ============================================================================
// Guild Mappers
// ============================================================================

impl From<&Guild> for GuildResponse {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id,
            guild_id: guild.guild_id,
            guild_name: guild.guild_name.clone(),
            prefix: guild.prefix.clone(),
            help_channel_id: guild.help_channel_id,
            showcase_channel_id: guild.showcase_channel_id,
            sync_label: guild.sync_label.clone(),
            issue_linking: guild.issue_linking,
            comment_linking: guild.comment_linking,
            doc_linking: guild.doc_linking,
            created_at: guild.created_at,
            updated_at: guild.updated_at,
        }
    }
}

impl From<Guild> for GuildResponse {
    fn from(guild: Guild) -> Self {
        Self::from(&guild)
    }
}

// ============================================================================
// GitHub Config Mappers
// ============================================================================

impl From<&GitHubConfig> for GitHubConfigResponse {
    fn from(config: &GitHubConfig) -> Self {
        Self {
            id: config.id,
            guild_id: config.guild_id,
            discussion_sync: config.discussion_sync,
            github_organization: config.github_organization.clone(),
            github_repository: config.github_repository.clone(),
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

impl From<GitHubConfig> for GitHubConfigResponse {
    fn from(config: GitHubConfig) -> Self {
        Self::from(&config)
    }
}

// ============================================================================
// Forum Config Mappers
// ============================================================================

impl From<&ForumConfig> for ForumConfigResponse {
    fn from(config: &ForumConfig) -> Self {
        Self {
            id: config.id,
            guild_id: config.guild_id,
            help_forum: config.help_forum,
            help_forum_category: config.help_forum_category.clone(),
            help_thread_auto_close: config.help_thread_auto_close,
            help_thread_auto_close_days: config.help_thread_auto_close_days,
            help_thread_notify: config.help_thread_notify,
            help_thread_notify_roles: config.help_thread_notify_roles.clone(),
            help_thread_notify_days: config.help_thread_notify_days,
            help_thread_sync: config.help_thread_sync,
            showcase_forum: config.showcase_forum,
            showcase_forum_category: config.showcase_forum_category.clone(),
            showcase_thread_auto_close: config.showcase_thread_auto_close,
            showcase_thread_auto_close_days: config.showcase_thread_auto_close_days,
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

impl From<ForumConfig> for ForumConfigResponse {
    fn from(config: ForumConfig) -> Self {
        Self::from(&config)
    }
}

// ============================================================================
// Stack Overflow Tag Mappers
// ============================================================================

impl From<&SoTagsConfig> for SoTagResponse {
    fn from(tag: &SoTagsConfig) -> Self {
        Self {
            id: tag.id,
            guild_id: tag.guild_id,
            tag_name: tag.tag_name.clone(),
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}

impl From<SoTagsConfig> for SoTagResponse {
    fn from(tag: SoTagsConfig) -> Self {
        Self::from(&tag)
    }
}

impl From<&SoTagView> for SoTagViewResponse {
    fn from(view: &SoTagView) -> Self {
        Self {
            id: view.id,
            guild_id: view.guild_id,
            guild_name: view.guild_name.clone(),
            tag_name: view.tag_name.clone(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

impl From<SoTagView> for SoTagViewResponse {
    fn from(view: SoTagView) -> Self {
        Self::from(&view)
    }
}

// ============================================================================
// Allowed User Mappers
// ============================================================================

impl From<&AllowedUserView> for AllowedUserResponse {
    fn from(view: &AllowedUserView) -> Self {
        Self {
            id: view.id,
            guild_id: view.guild_id,
            user_id: view.user_id,
            user_name: view.user_name.clone(),
            discriminator: view.discriminator.clone(),
            avatar_url: view.avatar_url.clone(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

impl From<AllowedUserView> for AllowedUserResponse {
    fn from(view: AllowedUserView) -> Self {
        Self::from(&view)
    }
}

/// Helper struct pairing a fresh association with its resolved user
///
/// The upsert flow already holds both rows, so the response is assembled
/// without a second query.
pub struct AllowedUserWithProfile {
    pub entry: AllowedUsersConfig,
    pub user: User,
}

impl From<AllowedUserWithProfile> for AllowedUserResponse {
    fn from(value: AllowedUserWithProfile) -> Self {
        Self {
            id: value.entry.id,
            guild_id: value.entry.guild_id,
            user_id: value.user.id,
            user_name: value.user.name,
            discriminator: value.user.discriminator,
            avatar_url: value.user.avatar_url,
            created_at: value.entry.created_at,
            updated_at: value.entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_core::Snowflake;

    #[test]
    fn test_guild_mapping_carries_all_fields() {
        let mut guild = Guild::new(Snowflake::new(42), "Test".to_string());
        guild.set_sync_label(Some("s:github".to_string()));
        guild.set_issue_linking(true);

        let response = GuildResponse::from(&guild);
        assert_eq!(response.id, guild.id);
        assert_eq!(response.guild_id, Snowflake::new(42));
        assert_eq!(response.prefix, "!");
        assert_eq!(response.sync_label.as_deref(), Some("s:github"));
        assert!(response.issue_linking);
    }

    #[test]
    fn test_forum_mapping_preserves_notify_roles() {
        let mut config = ForumConfig::new(Snowflake::new(1));
        config.set_notify_roles(vec![Snowflake::new(123), Snowflake::new(456)]);

        let response = ForumConfigResponse::from(&config);
        assert_eq!(
            response.help_thread_notify_roles,
            vec![Snowflake::new(123), Snowflake::new(456)]
        );
    }

    #[test]
    fn test_allowed_user_with_profile_mapping() {
        let mut user = User::new("alice".to_string(), "0001".to_string());
        user.set_avatar_url(Some("https://cdn.example/a.png".to_string()));
        let entry = AllowedUsersConfig::new(Snowflake::new(42), user.id);

        let response = AllowedUserResponse::from(AllowedUserWithProfile {
            entry: entry.clone(),
            user,
        });
        assert_eq!(response.id, entry.id);
        assert_eq!(response.guild_id, Snowflake::new(42));
        assert_eq!(response.user_name, "alice");
        assert_eq!(response.discriminator, "0001");
        assert!(response.avatar_url.is_some());
    }
}
