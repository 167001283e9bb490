//! Integration test utilities for the guild configuration service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the WebSocket dashboard.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
