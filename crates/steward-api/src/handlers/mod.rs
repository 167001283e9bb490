//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod allowed_users;
pub mod dashboard;
pub mod forum;
pub mod github;
pub mod guilds;
pub mod health;
pub mod so_tags;
