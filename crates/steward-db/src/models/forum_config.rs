//! Forum config database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for forum_configs table
///
/// `help_thread_notify_roles` arrives as the native array form; the
/// storage codec turns it into domain role identifiers.
#[derive(Debug, Clone, FromRow)]
pub struct ForumConfigModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub help_forum: bool,
    pub help_forum_category: Option<String>,
    pub help_thread_auto_close: bool,
    pub help_thread_auto_close_days: Option<i32>,
    pub help_thread_notify: bool,
    pub help_thread_notify_roles: Vec<i64>,
    pub help_thread_notify_days: Option<i32>,
    pub help_thread_sync: bool,
    pub showcase_forum: bool,
    pub showcase_forum_category: Option<String>,
    pub showcase_thread_auto_close: bool,
    pub showcase_thread_auto_close_days: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
