//! Storage-representation codecs
//!
//! Columns whose physical form varies by engine are translated here so
//! models and repositories stay representation-agnostic.

mod role_list;

pub use role_list::{from_array, from_encoded, to_array, to_encoded, RoleListStorage, StoredRoleList};
