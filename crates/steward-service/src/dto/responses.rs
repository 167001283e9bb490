//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Record ids are
//! UUIDs; platform snowflakes serialize as plain numbers to match the bot
//! wire format.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use steward_core::{ServiceStatus, Snowflake};

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with offset-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        Self {
            items,
            meta: PaginationMeta {
                total,
                limit,
                offset,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Total rows matching the filter, across all pages
    pub total: i64,
    /// Page size limit used
    pub limit: i64,
    /// Offset of the first returned row
    pub offset: i64,
}

// ============================================================================
// Guild Responses
// ============================================================================

/// Guild representation
#[derive(Debug, Clone, Serialize)]
pub struct GuildResponse {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub guild_name: String,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_label: Option<String>,
    pub issue_linking: bool,
    pub comment_linking: bool,
    pub doc_linking: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// GitHub Config Responses
// ============================================================================

/// GitHub config representation
#[derive(Debug, Clone, Serialize)]
pub struct GitHubConfigResponse {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub discussion_sync: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repository: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Forum Config Responses
// ============================================================================

/// Forum config representation
#[derive(Debug, Clone, Serialize)]
pub struct ForumConfigResponse {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub help_forum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_forum_category: Option<String>,
    pub help_thread_auto_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_thread_auto_close_days: Option<i32>,
    pub help_thread_notify: bool,
    pub help_thread_notify_roles: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_thread_notify_days: Option<i32>,
    pub help_thread_sync: bool,
    pub showcase_forum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase_forum_category: Option<String>,
    pub showcase_thread_auto_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase_thread_auto_close_days: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Stack Overflow Tag Responses
// ============================================================================

/// One tracked tag row
#[derive(Debug, Clone, Serialize)]
pub struct SoTagResponse {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tracked tag row joined with its guild's display name
#[derive(Debug, Clone, Serialize)]
pub struct SoTagViewResponse {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub guild_name: String,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Allowed User Responses
// ============================================================================

/// Allowed-user association joined with the user's profile
#[derive(Debug, Clone, Serialize)]
pub struct AllowedUserResponse {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub user_id: Uuid,
    pub user_name: String,
    pub discriminator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy".to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn alive() -> Self {
        Self {
            status: "alive".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each probed dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

/// Full aggregate status: every probe plus the reduced overall value
#[derive(Debug, Clone, Serialize)]
pub struct SystemHealthResponse {
    pub database: ServiceStatus,
    pub bot: ServiceStatus,
    pub overall: ServiceStatus,
    pub timestamp: DateTime<Utc>,
}

impl SystemHealthResponse {
    pub fn new(database: ServiceStatus, bot: ServiceStatus, overall: ServiceStatus) -> Self {
        Self {
            database,
            bot,
            overall,
            timestamp: Utc::now(),
        }
    }
}
