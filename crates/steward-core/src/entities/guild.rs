//! Guild entity - one community's configuration aggregate root

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// Guild (community) configuration aggregate root
///
/// Owns the four dependent configuration kinds; deleting a guild removes
/// all of them. `guild_id` is assigned by the chat platform and never
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub guild_name: String,
    pub prefix: String,
    pub help_channel_id: Option<Snowflake>,
    pub showcase_channel_id: Option<Snowflake>,
    pub sync_label: Option<String>,
    pub issue_linking: bool,
    pub comment_linking: bool,
    pub doc_linking: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guild {
    /// Command prefix applied when none is configured
    pub const DEFAULT_PREFIX: &'static str = "!";

    /// Create a new Guild with default prefix and all features disabled
    pub fn new(guild_id: Snowflake, guild_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guild_id,
            guild_name,
            prefix: Self::DEFAULT_PREFIX.to_string(),
            help_channel_id: None,
            showcase_channel_id: None,
            sync_label: None,
            issue_linking: false,
            comment_linking: false,
            doc_linking: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_guild_name(&mut self, guild_name: String) {
        self.guild_name = guild_name;
        self.updated_at = Utc::now();
    }

    /// Update the command prefix
    pub fn set_prefix(&mut self, prefix: String) {
        self.prefix = prefix;
        self.updated_at = Utc::now();
    }

    /// Update the help channel reference
    pub fn set_help_channel_id(&mut self, channel_id: Option<Snowflake>) {
        self.help_channel_id = channel_id;
        self.updated_at = Utc::now();
    }

    /// Update the showcase channel reference
    pub fn set_showcase_channel_id(&mut self, channel_id: Option<Snowflake>) {
        self.showcase_channel_id = channel_id;
        self.updated_at = Utc::now();
    }

    /// Update the sync label
    pub fn set_sync_label(&mut self, label: Option<String>) {
        self.sync_label = label;
        self.updated_at = Utc::now();
    }

    /// Toggle the issue-linking feature
    pub fn set_issue_linking(&mut self, enabled: bool) {
        self.issue_linking = enabled;
        self.updated_at = Utc::now();
    }

    /// Toggle the comment-linking feature
    pub fn set_comment_linking(&mut self, enabled: bool) {
        self.comment_linking = enabled;
        self.updated_at = Utc::now();
    }

    /// Toggle the doc-linking feature
    pub fn set_doc_linking(&mut self, enabled: bool) {
        self.doc_linking = enabled;
        self.updated_at = Utc::now();
    }
}
