//! Storage codec for role-identifier lists
//!
//! The help-forum notify-role list is the one list-valued column in the
//! schema. Array-capable engines persist it as a native integer array
//! (PostgreSQL `BIGINT[]`); engines without array columns persist a
//! JSON-encoded text column instead. Translation lives here, at the
//! storage edge; domain code only ever sees `Vec<Snowflake>`.

use steward_core::error::DomainError;
use steward_core::value_objects::Snowflake;

/// Physical representation of a role list in the backing store
///
/// Selected once per deployment to match the configured engine. The
/// PostgreSQL repositories use [`RoleListStorage::NativeArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleListStorage {
    /// Native integer array column
    #[default]
    NativeArray,
    /// JSON-encoded text column, for engines without array types
    EncodedJson,
}

/// A role list in its stored form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRoleList {
    Array(Vec<i64>),
    Encoded(String),
}

impl RoleListStorage {
    /// Encode a domain role list into this representation's stored form
    pub fn write(self, roles: &[Snowflake]) -> StoredRoleList {
        match self {
            Self::NativeArray => StoredRoleList::Array(to_array(roles)),
            Self::EncodedJson => StoredRoleList::Encoded(to_encoded(roles)),
        }
    }

    /// Decode a stored role list back into domain form
    ///
    /// The stored form must match this representation; the two never mix
    /// within one deployment.
    pub fn read(self, stored: StoredRoleList) -> Result<Vec<Snowflake>, DomainError> {
        match (self, stored) {
            (Self::NativeArray, StoredRoleList::Array(raw)) => Ok(from_array(raw)),
            (Self::EncodedJson, StoredRoleList::Encoded(text)) => from_encoded(&text),
            (_, stored) => Err(DomainError::DatabaseError(format!(
                "role list stored as {stored:?}, which does not match the configured representation"
            ))),
        }
    }
}

/// Convert a domain role list into a native array column value
pub fn to_array(roles: &[Snowflake]) -> Vec<i64> {
    roles.iter().map(|r| r.into_inner()).collect()
}

/// Convert a native array column value into domain form
pub fn from_array(raw: Vec<i64>) -> Vec<Snowflake> {
    raw.into_iter().map(Snowflake::new).collect()
}

/// Convert a domain role list into a JSON-encoded text column value
pub fn to_encoded(roles: &[Snowflake]) -> String {
    // Serializing a list of integers cannot fail.
    serde_json::to_string(&to_array(roles)).unwrap_or_else(|_| String::from("[]"))
}

/// Parse a JSON-encoded text column value into domain form
pub fn from_encoded(text: &str) -> Result<Vec<Snowflake>, DomainError> {
    let raw: Vec<i64> = serde_json::from_str(text)
        .map_err(|e| DomainError::DatabaseError(format!("malformed role list column: {e}")))?;
    Ok(from_array(raw))
}
