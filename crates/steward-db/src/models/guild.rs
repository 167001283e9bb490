//! Guild database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for guilds table
#[derive(Debug, Clone, FromRow)]
pub struct GuildModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub guild_name: String,
    pub prefix: String,
    pub help_channel_id: Option<i64>,
    pub showcase_channel_id: Option<i64>,
    pub sync_label: Option<String>,
    pub issue_linking: bool,
    pub comment_linking: bool,
    pub doc_linking: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
