//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use futures_util::StreamExt;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Read the next status frame, skipping control messages
async fn next_frame(ws: &mut WsStream) -> anyhow::Result<DashboardFrame> {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await?
            .ok_or_else(|| anyhow::anyhow!("stream ended before a frame arrived"))??;
        match msg {
            Message::Text(text) => return Ok(serde_json::from_str(&text)?),
            Message::Ping(_) | Message::Pong(_) => {}
            other => anyhow::bail!("unexpected message: {other:?}"),
        }
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let readiness: ReadinessResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(readiness.status, "ready");
    assert_eq!(readiness.checks.database, "healthy");
}

#[tokio::test]
async fn test_health_live() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/live").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "alive");
}

#[tokio::test]
async fn test_system_health_reports_offline_bot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // The bot probe is stubbed offline, so the aggregate degrades to 503
    // even with a healthy database.
    let response = server.get("/system/health").await.expect("Request failed");
    let health: SystemHealthResponse = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    assert_eq!(health.database, "online");
    assert_eq!(health.bot, "offline");
    assert_eq!(health.overall, "degraded");
}

// ============================================================================
// Guild Tests
// ============================================================================

#[tokio::test]
async fn test_create_guild() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    let guild: GuildResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(guild.guild_id, request.guild_id);
    assert_eq!(guild.guild_name, request.guild_name);
    assert_eq!(guild.prefix, "!");
    assert!(!guild.issue_linking);
}

#[tokio::test]
async fn test_create_guild_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();

    // First registration
    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second registration with the same external id
    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(error.error.code, "GUILD_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_guild_rejects_blank_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateGuildRequest::unique();
    request.guild_name = String::new();

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_guild_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/guilds/not-a-number").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_get_guild_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A valid snowflake no test ever registers
    let response = server.get("/api/v1/guilds/1").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_GUILD");
}

#[tokio::test]
async fn test_update_guild() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    let created: GuildResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Patch a couple of fields; the rest must stay unchanged
    let update = UpdateGuildRequest {
        guild_name: Some("Renamed Guild".to_string()),
        doc_linking: Some(true),
        ..UpdateGuildRequest::default()
    };
    let response = server
        .patch(&format!("/api/v1/guilds/{}", request.guild_id), &update)
        .await
        .unwrap();
    let updated: GuildResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.guild_name, "Renamed Guild");
    assert!(updated.doc_linking);
    assert_eq!(updated.prefix, "!");
    assert_eq!(updated.guild_id, request.guild_id);
}

#[tokio::test]
async fn test_guild_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Lookup by external id returns what was registered
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}"))
        .await
        .unwrap();
    let guild: GuildResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guild.guild_id, guild_id);
    assert_eq!(guild.guild_name, request.guild_name);
    assert_eq!(guild.prefix, "!");

    let response = server
        .delete(&format!("/api/v1/guilds/{guild_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // A never-configured dependent reads as missing after the delete too
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/forum"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_guilds_with_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = CreateGuildRequest::unique();
    let token = format!("searchtoken{}", request.guild_id);
    request.guild_name = format!("Guild {token}");

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Another guild that must not match
    let other = CreateGuildRequest::unique();
    let response = server.post("/api/v1/guilds", &other).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds?search={token}&limit=10"))
        .await
        .unwrap();
    let page: PaginatedResponse<GuildResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.meta.limit, 10);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].guild_id, request.guild_id);
}

#[tokio::test]
async fn test_delete_guild_cascades_configs() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Attach dependent configuration
    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/github"),
            &UpsertGitHubConfigRequest::sample(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/sotags"),
            &UpsertSoTagRequest::named("rust"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Delete the guild
    let response = server
        .delete(&format!("/api/v1/guilds/{guild_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Guild and everything hanging off it must be gone
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/github"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/sotags"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// GitHub Config Tests
// ============================================================================

#[tokio::test]
async fn test_github_config_upsert_and_get() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // First upsert creates
    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/github"),
            &UpsertGitHubConfigRequest::sample(),
        )
        .await
        .unwrap();
    let config: GitHubConfigResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(config.guild_id, guild_id);
    assert!(config.discussion_sync);
    assert_eq!(config.github_organization.as_deref(), Some("test-org"));

    // Second upsert replaces
    let mut changed = UpsertGitHubConfigRequest::sample();
    changed.github_repository = Some("other-repo".to_string());
    let response = server
        .put(&format!("/api/v1/guilds/{guild_id}/github"), &changed)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/github"))
        .await
        .unwrap();
    let fetched: GitHubConfigResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.github_repository.as_deref(), Some("other-repo"));
}

#[tokio::test]
async fn test_github_config_for_unknown_guild() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Configuring a guild nobody registered trips the reference check
    let guild_id = unique_guild_id();
    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/github"),
            &UpsertGitHubConfigRequest::sample(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(error.error.code, "UNKNOWN_GUILD_REFERENCE");
}

#[tokio::test]
async fn test_github_config_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // No config yet
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/github"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/github"),
            &UpsertGitHubConfigRequest::sample(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/guilds/{guild_id}/github"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/github"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Forum Config Tests
// ============================================================================

#[tokio::test]
async fn test_forum_config_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let forum_req = UpsertForumConfigRequest::help_enabled();
    let response = server
        .put(&format!("/api/v1/guilds/{guild_id}/forum"), &forum_req)
        .await
        .unwrap();
    let config: ForumConfigResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(config.guild_id, guild_id);
    assert!(config.help_forum);
    assert_eq!(config.help_forum_category.as_deref(), Some("Help"));
    assert_eq!(config.help_thread_auto_close_days, Some(7));
    assert_eq!(config.help_thread_notify_roles, vec![111_222_333_444]);
    assert!(!config.showcase_forum);

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/forum"))
        .await
        .unwrap();
    let fetched: ForumConfigResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, config.id);

    let response = server
        .delete(&format!("/api/v1/guilds/{guild_id}/forum"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/forum"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Stack Overflow Tag Tests
// ============================================================================

#[tokio::test]
async fn test_so_tags_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // No tags tracked yet
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/sotags"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/sotags"),
            &UpsertSoTagRequest::named("rust"),
        )
        .await
        .unwrap();
    let tag: SoTagResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tag.tag_name, "rust");
    assert_eq!(tag.guild_id, guild_id);

    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/sotags"),
            &UpsertSoTagRequest::named("tokio"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Listing joins in the guild name
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/sotags"))
        .await
        .unwrap();
    let tags: Vec<SoTagViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tags.len(), 2);
    assert!(tags.iter().all(|t| t.guild_name == request.guild_name));

    let response = server
        .delete(&format!("/api/v1/guilds/{guild_id}/sotags/rust"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/sotags"))
        .await
        .unwrap();
    let tags: Vec<SoTagViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].tag_name, "tokio");
}

#[tokio::test]
async fn test_so_tag_upsert_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    for _ in 0..2 {
        let response = server
            .put(
                &format!("/api/v1/guilds/{guild_id}/sotags"),
                &UpsertSoTagRequest::named("serde"),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/sotags"))
        .await
        .unwrap();
    let tags: Vec<SoTagViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tags.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_so_tag() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/guilds/{guild_id}/sotags/never-tracked"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Allowed User Tests
// ============================================================================

#[tokio::test]
async fn test_allowed_users_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Nobody allowed yet
    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/allowed-users"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let user_req = UpsertAllowedUserRequest::unique();
    let response = server
        .put(
            &format!("/api/v1/guilds/{guild_id}/allowed-users"),
            &user_req,
        )
        .await
        .unwrap();
    let allowed: AllowedUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(allowed.guild_id, guild_id);
    assert_eq!(allowed.user_name, user_req.name);
    assert_eq!(allowed.discriminator, user_req.discriminator);

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/allowed-users"))
        .await
        .unwrap();
    let listed: Vec<AllowedUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user_id, allowed.user_id);

    let response = server
        .delete(&format!(
            "/api/v1/guilds/{guild_id}/allowed-users/{}",
            allowed.user_id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/guilds/{guild_id}/allowed-users"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_disallow_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuildRequest::unique();
    let guild_id = request.guild_id;

    let response = server.post("/api/v1/guilds", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!(
            "/api/v1/guilds/{guild_id}/allowed-users/{}",
            uuid::Uuid::new_v4()
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Dashboard WebSocket Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_streams_status_frames() {
    if !check_test_env().await {
        return;
    }

    let mut config = test_config().expect("Failed to load config");
    config.dashboard.interval_secs = 1;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    // At least one guild so the count is meaningful
    let response = server
        .post("/api/v1/guilds", &CreateGuildRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let (mut ws, _) = connect_async(server.ws_url())
        .await
        .expect("WebSocket connect failed");

    // The first frame arrives immediately, before the first tick
    let first = next_frame(&mut ws).await.expect("No initial frame");
    assert!(first.server_count >= 1);
    assert_eq!(first.bot_status, "offline");
    assert!(chrono::DateTime::parse_from_rfc3339(&first.timestamp).is_ok());

    let second = next_frame(&mut ws).await.expect("No periodic frame");
    assert!(second.uptime >= first.uptime);
    assert!(second.server_count >= 1);
}

#[tokio::test]
async fn test_dashboard_closes_on_shutdown() {
    if !check_test_env().await {
        return;
    }

    let mut config = test_config().expect("Failed to load config");
    config.dashboard.interval_secs = 1;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let (mut ws, _) = connect_async(server.ws_url())
        .await
        .expect("WebSocket connect failed");

    // Stream is live before the shutdown flips
    next_frame(&mut ws).await.expect("No initial frame");

    server.state.trigger_shutdown();

    let closed = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match ws.next().await {
                None | Some(Ok(Message::Close(_))) | Some(Err(_)) => break true,
                Some(Ok(_)) => {}
            }
        }
    })
    .await
    .unwrap_or(false);

    assert!(closed, "dashboard stream did not close after shutdown");
}
