//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::{ConfigKind, Snowflake};

/// Domain layer errors
///
/// Not-found, conflict, and referential failures are expected outcomes the
/// caller can act on; they are always returned as typed values, never
/// collapsed into a generic failure.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guild not found: {0}")]
    GuildNotFound(Snowflake),

    #[error("Guild record not found: {0}")]
    GuildRecordNotFound(Uuid),

    #[error("No {kind} config for guild {guild_id}")]
    ConfigNotFound { kind: ConfigKind, guild_id: Snowflake },

    #[error("{kind} config record not found: {id}")]
    ConfigRecordNotFound { kind: ConfigKind, id: Uuid },

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Guild already exists: {0}")]
    GuildAlreadyExists(Snowflake),

    #[error("Duplicate {kind} config for guild {guild_id}")]
    DuplicateConfig { kind: ConfigKind, guild_id: Snowflake },

    // =========================================================================
    // Referential Errors
    // =========================================================================
    #[error("Referenced guild does not exist: {0}")]
    GuildReferenceMissing(Snowflake),

    #[error("Referenced user does not exist: {0}")]
    UserReferenceMissing(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GuildNotFound(_) | Self::GuildRecordNotFound(_) => "UNKNOWN_GUILD",
            Self::ConfigNotFound { .. } | Self::ConfigRecordNotFound { .. } => "UNKNOWN_CONFIG",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Conflict
            Self::GuildAlreadyExists(_) => "GUILD_ALREADY_EXISTS",
            Self::DuplicateConfig { .. } => "DUPLICATE_CONFIG",

            // Referential
            Self::GuildReferenceMissing(_) => "UNKNOWN_GUILD_REFERENCE",
            Self::UserReferenceMissing(_) => "UNKNOWN_USER_REFERENCE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GuildNotFound(_)
                | Self::GuildRecordNotFound(_)
                | Self::ConfigNotFound { .. }
                | Self::ConfigRecordNotFound { .. }
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::GuildAlreadyExists(_) | Self::DuplicateConfig { .. }
        )
    }

    /// Check if this is a referential integrity error
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            Self::GuildReferenceMissing(_) | Self::UserReferenceMissing(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::GuildNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_GUILD");

        let err = DomainError::DuplicateConfig {
            kind: ConfigKind::SoTags,
            guild_id: Snowflake::new(1),
        };
        assert_eq!(err.code(), "DUPLICATE_CONFIG");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::GuildNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::ConfigNotFound {
            kind: ConfigKind::Forum,
            guild_id: Snowflake::new(1),
        }
        .is_not_found());
        assert!(!DomainError::GuildAlreadyExists(Snowflake::new(1)).is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::GuildAlreadyExists(Snowflake::new(1)).is_conflict());
        assert!(!DomainError::GuildReferenceMissing(Snowflake::new(1)).is_conflict());
    }

    #[test]
    fn test_is_referential() {
        assert!(DomainError::GuildReferenceMissing(Snowflake::new(1)).is_referential());
        assert!(!DomainError::GuildNotFound(Snowflake::new(1)).is_referential());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::GuildNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Guild not found: 123");

        let err = DomainError::ConfigNotFound {
            kind: ConfigKind::Forum,
            guild_id: Snowflake::new(42),
        };
        assert_eq!(err.to_string(), "No forum config for guild 42");
    }
}
