//! Stack Overflow tag configuration - tags a guild tracks for new questions

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// One tracked Stack Overflow tag for a guild
///
/// A guild may track any number of tags; the `(guild_id, tag_name)` pair
/// is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoTagsConfig {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SoTagsConfig {
    /// Create a new tracked tag
    pub fn new(guild_id: Snowflake, tag_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guild_id,
            tag_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Tag row joined with its guild's display name
///
/// Populated at query time; the tag row itself never reaches through to
/// guild fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoTagView {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub guild_name: String,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
