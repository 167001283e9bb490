//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Request and
//! response structs mirror the API wire format rather than reusing the
//! service DTOs, so a field rename on either side breaks a test.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Get a unique external guild id, clear of ids used by the repository tests
pub fn unique_guild_id() -> u64 {
    800_000_000_000 + unique_suffix()
}

/// Create guild request
#[derive(Debug, Serialize)]
pub struct CreateGuildRequest {
    pub guild_id: u64,
    pub guild_name: String,
    pub prefix: Option<String>,
    pub help_channel_id: Option<u64>,
    pub showcase_channel_id: Option<u64>,
    pub sync_label: Option<String>,
    pub issue_linking: bool,
    pub comment_linking: bool,
    pub doc_linking: bool,
}

impl CreateGuildRequest {
    pub fn unique() -> Self {
        let guild_id = unique_guild_id();
        Self {
            guild_id,
            guild_name: format!("Test Guild {guild_id}"),
            prefix: None,
            help_channel_id: None,
            showcase_channel_id: None,
            sync_label: None,
            issue_linking: false,
            comment_linking: false,
            doc_linking: false,
        }
    }
}

/// Update guild request; omitted fields stay unchanged
#[derive(Debug, Default, Serialize)]
pub struct UpdateGuildRequest {
    pub guild_name: Option<String>,
    pub prefix: Option<String>,
    pub help_channel_id: Option<u64>,
    pub showcase_channel_id: Option<u64>,
    pub sync_label: Option<String>,
    pub issue_linking: Option<bool>,
    pub comment_linking: Option<bool>,
    pub doc_linking: Option<bool>,
}

/// Guild response
#[derive(Debug, Deserialize)]
pub struct GuildResponse {
    pub id: String,
    pub guild_id: u64,
    pub guild_name: String,
    pub prefix: String,
    pub help_channel_id: Option<u64>,
    pub showcase_channel_id: Option<u64>,
    pub sync_label: Option<String>,
    pub issue_linking: bool,
    pub comment_linking: bool,
    pub doc_linking: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Paginated list envelope
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// GitHub config upsert request
#[derive(Debug, Serialize)]
pub struct UpsertGitHubConfigRequest {
    pub discussion_sync: bool,
    pub github_organization: Option<String>,
    pub github_repository: Option<String>,
}

impl UpsertGitHubConfigRequest {
    pub fn sample() -> Self {
        Self {
            discussion_sync: true,
            github_organization: Some("test-org".to_string()),
            github_repository: Some("test-repo".to_string()),
        }
    }
}

/// GitHub config response
#[derive(Debug, Deserialize)]
pub struct GitHubConfigResponse {
    pub id: String,
    pub guild_id: u64,
    pub discussion_sync: bool,
    pub github_organization: Option<String>,
    pub github_repository: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Forum config upsert request
#[derive(Debug, Default, Serialize)]
pub struct UpsertForumConfigRequest {
    pub help_forum: bool,
    pub help_forum_category: Option<String>,
    pub help_thread_auto_close: bool,
    pub help_thread_auto_close_days: Option<i32>,
    pub help_thread_notify: bool,
    pub help_thread_notify_roles: Vec<u64>,
    pub help_thread_notify_days: Option<i32>,
    pub help_thread_sync: bool,
    pub showcase_forum: bool,
    pub showcase_forum_category: Option<String>,
    pub showcase_thread_auto_close: bool,
    pub showcase_thread_auto_close_days: Option<i32>,
}

impl UpsertForumConfigRequest {
    pub fn help_enabled() -> Self {
        Self {
            help_forum: true,
            help_forum_category: Some("Help".to_string()),
            help_thread_auto_close: true,
            help_thread_auto_close_days: Some(7),
            help_thread_notify: true,
            help_thread_notify_roles: vec![111_222_333_444],
            help_thread_notify_days: Some(3),
            help_thread_sync: true,
            ..Self::default()
        }
    }
}

/// Forum config response
#[derive(Debug, Deserialize)]
pub struct ForumConfigResponse {
    pub id: String,
    pub guild_id: u64,
    pub help_forum: bool,
    pub help_forum_category: Option<String>,
    pub help_thread_auto_close: bool,
    pub help_thread_auto_close_days: Option<i32>,
    pub help_thread_notify: bool,
    pub help_thread_notify_roles: Vec<u64>,
    pub help_thread_notify_days: Option<i32>,
    pub help_thread_sync: bool,
    pub showcase_forum: bool,
    pub showcase_forum_category: Option<String>,
    pub showcase_thread_auto_close: bool,
    pub showcase_thread_auto_close_days: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// Stack Overflow tag upsert request
#[derive(Debug, Serialize)]
pub struct UpsertSoTagRequest {
    pub tag_name: String,
}

impl UpsertSoTagRequest {
    pub fn named(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
        }
    }
}

/// Stack Overflow tag response
#[derive(Debug, Deserialize)]
pub struct SoTagResponse {
    pub id: String,
    pub guild_id: u64,
    pub tag_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Stack Overflow tag response joined with the guild name
#[derive(Debug, Deserialize)]
pub struct SoTagViewResponse {
    pub id: String,
    pub guild_id: u64,
    pub guild_name: String,
    pub tag_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Allowed user upsert request
#[derive(Debug, Serialize)]
pub struct UpsertAllowedUserRequest {
    pub name: String,
    pub discriminator: String,
    pub avatar_url: Option<String>,
}

impl UpsertAllowedUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("testuser{suffix}"),
            discriminator: "0001".to_string(),
            avatar_url: None,
        }
    }
}

/// Allowed user response
#[derive(Debug, Deserialize)]
pub struct AllowedUserResponse {
    pub id: String,
    pub guild_id: u64,
    pub user_id: String,
    pub user_name: String,
    pub discriminator: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness response
#[derive(Debug, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Deserialize)]
pub struct HealthChecks {
    pub database: String,
}

/// System health response
#[derive(Debug, Deserialize)]
pub struct SystemHealthResponse {
    pub database: String,
    pub bot: String,
    pub overall: String,
    pub timestamp: String,
}

/// One dashboard WebSocket frame
#[derive(Debug, Deserialize)]
pub struct DashboardFrame {
    pub server_count: i64,
    pub bot_status: String,
    pub uptime: u64,
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
