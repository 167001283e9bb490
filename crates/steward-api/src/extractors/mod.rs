//! Axum extractors for request handling
//!
//! Custom extractors for path parsing, validation, and list queries.

mod pagination;
mod path;
mod validated;

pub use pagination::{ListParams, ListQuery};
pub use path::{GuildIdPath, GuildTagPath, GuildUserPath};
pub use validated::ValidatedJson;
