//! Forum configuration - help-forum and showcase-forum settings for a guild

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// Forum settings for one guild (at most one row per guild)
///
/// The help and showcase blocks are independent features that happen to
/// share a row. `help_thread_notify_roles` is the only list-valued field;
/// how it is persisted is a storage concern, the domain always sees a
/// plain list of role identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumConfig {
    pub id: Uuid,
    pub guild_id: Snowflake,
    // Help forum
    pub help_forum: bool,
    pub help_forum_category: Option<String>,
    pub help_thread_auto_close: bool,
    pub help_thread_auto_close_days: Option<i32>,
    pub help_thread_notify: bool,
    pub help_thread_notify_roles: Vec<Snowflake>,
    pub help_thread_notify_days: Option<i32>,
    pub help_thread_sync: bool,
    // Showcase forum
    pub showcase_forum: bool,
    pub showcase_forum_category: Option<String>,
    pub showcase_thread_auto_close: bool,
    pub showcase_thread_auto_close_days: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ForumConfig {
    /// Create a new config with both forums disabled
    pub fn new(guild_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guild_id,
            help_forum: false,
            help_forum_category: None,
            help_thread_auto_close: false,
            help_thread_auto_close_days: None,
            help_thread_notify: false,
            help_thread_notify_roles: Vec::new(),
            help_thread_notify_days: None,
            help_thread_sync: false,
            showcase_forum: false,
            showcase_forum_category: None,
            showcase_thread_auto_close: false,
            showcase_thread_auto_close_days: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Enable or disable the help forum
    pub fn set_help_forum(&mut self, enabled: bool) {
        self.help_forum = enabled;
        self.updated_at = Utc::now();
    }

    /// Enable or disable the showcase forum
    pub fn set_showcase_forum(&mut self, enabled: bool) {
        self.showcase_forum = enabled;
        self.updated_at = Utc::now();
    }

    /// Replace the set of roles pinged for stale help threads
    pub fn set_notify_roles(&mut self, roles: Vec<Snowflake>) {
        self.help_thread_notify_roles = roles;
        self.updated_at = Utc::now();
    }

    /// Bump the modification timestamp after direct field edits
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
