//! Stack Overflow tag config database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for so_tags_configs table
#[derive(Debug, Clone, FromRow)]
pub struct SoTagsConfigModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tag row joined with the owning guild's name (from query)
#[derive(Debug, Clone, FromRow)]
pub struct SoTagViewModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub guild_name: String,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
