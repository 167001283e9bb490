//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use uuid::Uuid;

use steward_core::error::DomainError;
use steward_core::value_objects::ConfigKind;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign-key violation and map it via the violated constraint name
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "guild record not found" error for a record ID
pub fn guild_record_not_found(id: Uuid) -> DomainError {
    DomainError::GuildRecordNotFound(id)
}

/// Create a "config record not found" error for a record ID
pub fn config_record_not_found(kind: ConfigKind, id: Uuid) -> DomainError {
    DomainError::ConfigRecordNotFound { kind, id }
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}
