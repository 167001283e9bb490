//! Allowed-user config database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for allowed_users_configs table
#[derive(Debug, Clone, FromRow)]
pub struct AllowedUsersConfigModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Association row joined with user profile fields (from query)
#[derive(Debug, Clone, FromRow)]
pub struct AllowedUserViewModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub user_id: Uuid,
    pub user_name: String,
    pub discriminator: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
