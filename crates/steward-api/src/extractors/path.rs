//! Path parameter extractors
//!
//! Typed extraction and parsing of identifiers from path parameters.

use steward_core::Snowflake;
use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters with guild_id
#[derive(Debug, serde::Deserialize)]
pub struct GuildIdPath {
    pub guild_id: String,
}

impl GuildIdPath {
    /// Parse guild_id as Snowflake
    pub fn guild_id(&self) -> Result<Snowflake, ApiError> {
        self.guild_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid guild_id format"))
    }
}

/// Path parameters with guild_id and tag_name
#[derive(Debug, serde::Deserialize)]
pub struct GuildTagPath {
    pub guild_id: String,
    pub tag_name: String,
}

impl GuildTagPath {
    /// Parse guild_id as Snowflake
    pub fn guild_id(&self) -> Result<Snowflake, ApiError> {
        self.guild_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid guild_id format"))
    }

    /// Get the tag name
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

/// Path parameters with guild_id and user record id
#[derive(Debug, serde::Deserialize)]
pub struct GuildUserPath {
    pub guild_id: String,
    pub user_id: String,
}

impl GuildUserPath {
    /// Parse guild_id as Snowflake
    pub fn guild_id(&self) -> Result<Snowflake, ApiError> {
        self.guild_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid guild_id format"))
    }

    /// Parse user_id as UUID
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
