//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, and those carrying user input
//! implement `Validate`. Snowflake fields accept JSON numbers or numeric
//! strings.

use serde::Deserialize;
use validator::Validate;

use steward_core::Snowflake;

// ============================================================================
// Guild Requests
// ============================================================================

/// Create guild request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuildRequest {
    /// Platform-assigned guild identifier
    pub guild_id: Snowflake,

    #[validate(length(min = 1, max = 100, message = "Guild name must be 1-100 characters"))]
    pub guild_name: String,

    /// Command prefix; defaults to `!` when omitted
    #[validate(length(min = 1, max = 5, message = "Prefix must be 1-5 characters"))]
    pub prefix: Option<String>,

    pub help_channel_id: Option<Snowflake>,

    pub showcase_channel_id: Option<Snowflake>,

    #[validate(length(max = 100, message = "Sync label must be at most 100 characters"))]
    pub sync_label: Option<String>,

    #[serde(default)]
    pub issue_linking: bool,

    #[serde(default)]
    pub comment_linking: bool,

    #[serde(default)]
    pub doc_linking: bool,
}

/// Update guild request
///
/// Fields left out of the body are left unchanged; `guild_id` is
/// platform-assigned and cannot be updated.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGuildRequest {
    #[validate(length(min = 1, max = 100, message = "Guild name must be 1-100 characters"))]
    pub guild_name: Option<String>,

    #[validate(length(min = 1, max = 5, message = "Prefix must be 1-5 characters"))]
    pub prefix: Option<String>,

    pub help_channel_id: Option<Snowflake>,

    pub showcase_channel_id: Option<Snowflake>,

    #[validate(length(max = 100, message = "Sync label must be at most 100 characters"))]
    pub sync_label: Option<String>,

    pub issue_linking: Option<bool>,

    pub comment_linking: Option<bool>,

    pub doc_linking: Option<bool>,
}

// ============================================================================
// GitHub Config Requests
// ============================================================================

/// Create-or-update request for a guild's GitHub config
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertGitHubConfigRequest {
    #[serde(default)]
    pub discussion_sync: bool,

    #[validate(length(max = 100, message = "Organization must be at most 100 characters"))]
    pub github_organization: Option<String>,

    #[validate(length(max = 100, message = "Repository must be at most 100 characters"))]
    pub github_repository: Option<String>,
}

// ============================================================================
// Forum Config Requests
// ============================================================================

/// Create-or-update request for a guild's forum config
///
/// Carries the full help and showcase blocks; omitted flags fall back to
/// disabled, matching a fresh config.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertForumConfigRequest {
    // Help forum
    #[serde(default)]
    pub help_forum: bool,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub help_forum_category: Option<String>,

    #[serde(default)]
    pub help_thread_auto_close: bool,

    #[validate(range(min = 1, max = 365, message = "Auto-close days must be 1-365"))]
    pub help_thread_auto_close_days: Option<i32>,

    #[serde(default)]
    pub help_thread_notify: bool,

    #[serde(default)]
    pub help_thread_notify_roles: Vec<Snowflake>,

    #[validate(range(min = 1, max = 365, message = "Notify days must be 1-365"))]
    pub help_thread_notify_days: Option<i32>,

    #[serde(default)]
    pub help_thread_sync: bool,

    // Showcase forum
    #[serde(default)]
    pub showcase_forum: bool,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub showcase_forum_category: Option<String>,

    #[serde(default)]
    pub showcase_thread_auto_close: bool,

    #[validate(range(min = 1, max = 365, message = "Auto-close days must be 1-365"))]
    pub showcase_thread_auto_close_days: Option<i32>,
}

// ============================================================================
// Stack Overflow Tag Requests
// ============================================================================

/// Track one Stack Overflow tag for a guild
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertSoTagRequest {
    #[validate(length(min = 1, max = 50, message = "Tag name must be 1-50 characters"))]
    pub tag_name: String,
}

// ============================================================================
// Allowed User Requests
// ============================================================================

/// Grant a user elevated bot access in a guild
///
/// The user is resolved by `(name, discriminator)` and created on first
/// sight.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertAllowedUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(equal = 4, message = "Discriminator must be exactly 4 characters"))]
    pub discriminator: String,

    pub avatar_url: Option<String>,
}
