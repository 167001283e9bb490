//! Model to entity mappers
//!
//! `From<Model>` impls converting database rows into domain objects.
//! Representation-specific columns (the forum notify-role list) pass
//! through the storage codecs on the way out.

mod allowed_users_config;
mod forum_config;
mod github_config;
mod guild;
mod so_tags_config;
mod user;
