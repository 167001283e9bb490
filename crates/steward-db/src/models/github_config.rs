//! GitHub config database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for github_configs table
#[derive(Debug, Clone, FromRow)]
pub struct GitHubConfigModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub discussion_sync: bool,
    pub github_organization: Option<String>,
    pub github_repository: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
