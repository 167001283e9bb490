//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
    pub discriminator: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
