//! Allowed-user configuration - users granted elevated bot access in a guild

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// Association between a guild and an allowed user
///
/// A guild may allow any number of users; the `(guild_id, user_id)` pair
/// is unique. The user itself has a separate lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedUsersConfig {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AllowedUsersConfig {
    /// Create a new association
    pub fn new(guild_id: Snowflake, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guild_id,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Association row joined with the user's profile fields
///
/// Populated at query time with an explicit join; the association row
/// never reaches through to user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedUserView {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub user_id: Uuid,
    pub user_name: String,
    pub discriminator: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
