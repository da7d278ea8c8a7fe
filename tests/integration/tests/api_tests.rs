//! API Integration Tests
//!
//! Every test spins up the full bridge against a scripted homeserver
//! stand-in; no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, MockHomeserver, TestServer};
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let body = assert_json(response, 200).await.unwrap();

    assert_eq!(body, json!({"status": "ok"}));
}

// ============================================================================
// Delivery Tests
// ============================================================================

#[tokio::test]
async fn test_devguard_finding_is_delivered() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("devguard", &room, &devguard_critical())
        .await
        .unwrap();
    let body = assert_status(response, 200).await.unwrap();
    assert_eq!(body, "ok");

    let sends = server.homeserver.sends();
    assert_eq!(sends.len(), 1);

    let send = &sends[0];
    assert_eq!(send.room, room);
    assert_eq!(
        send.authorization.as_deref(),
        Some("Bearer syt_test_token")
    );
    assert_eq!(send.body["msgtype"], "m.text");
    assert_eq!(send.body["format"], "org.matrix.custom.html");
    assert_eq!(
        send.body["body"],
        "🔴 critical: CVE-2024-3094 in xz-utils (asset devguard-api). Fix available: 5.6.2"
    );
    assert!(send.body["formatted_body"]
        .as_str()
        .unwrap()
        .contains("<code>CVE-2024-3094</code>"));
}

#[tokio::test]
async fn test_glitchtip_alert_renders_expected_message() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("glitchtip", &room, &glitchtip_alert())
        .await
        .unwrap();
    assert_status(response, 200).await.unwrap();

    let sends = server.homeserver.sends();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].body["body"], "GlitchTip Alert");
    assert_eq!(
        sends[0].body["formatted_body"],
        "<b>GlitchTip Alert:</b> devguard-api: *errors.errorString: Failed to setup \
         database connection (<a href=\"https://glitchtip.example.org/devguard/issues/5\">View Issue</a>)"
    );
}

#[tokio::test]
async fn test_botkube_event_without_recommendations() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("botkube", &room, &botkube_creation())
        .await
        .unwrap();
    let body = assert_status(response, 200).await.unwrap();
    assert_eq!(body, "ok");

    let sends = server.homeserver.sends();
    assert_eq!(sends.len(), 1);

    let formatted = sends[0].body["formatted_body"].as_str().unwrap();
    assert!(formatted.contains("v1/pods created"));
    assert!(!formatted.contains("Recommendations"));
}

#[tokio::test]
async fn test_gitlab_pipeline_success_is_delivered() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("gitlab", &room, &gitlab_pipeline_success())
        .await
        .unwrap();
    assert_status(response, 200).await.unwrap();

    let sends = server.homeserver.sends();
    assert_eq!(sends.len(), 1);
    assert_eq!(
        sends[0].body["body"],
        "✅ Pipeline succeeded on main in core/bridge"
    );
}

#[tokio::test]
async fn test_docs_assignment_is_delivered() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("documentationassignment", &room, &docs_assignment())
        .await
        .unwrap();
    let body = assert_status(response, 200).await.unwrap();
    assert_eq!(body, "ok");

    let sends = server.homeserver.sends();
    assert_eq!(sends.len(), 1);
    assert!(sends[0].body["body"]
        .as_str()
        .unwrap()
        .contains("Documentation assigned to mara"));
}

// ============================================================================
// Suppression Tests
// ============================================================================

#[tokio::test]
async fn test_bot_pull_request_is_ignored() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("github", &room, &github_bot_pr())
        .await
        .unwrap();
    let body = assert_status(response, 200).await.unwrap();

    assert_eq!(body, "ignored");
    assert!(server.homeserver.sends().is_empty());
}

#[tokio::test]
async fn test_human_pull_request_is_delivered() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("github", &room, &github_pr_opened())
        .await
        .unwrap();
    let body = assert_status(response, 200).await.unwrap();

    assert_eq!(body, "ok");
    assert_eq!(server.homeserver.sends().len(), 1);
}

#[tokio::test]
async fn test_accepted_finding_is_ignored() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("devguard", &room, &devguard_accepted())
        .await
        .unwrap();
    let body = assert_status(response, 200).await.unwrap();

    assert_eq!(body, "ignored");
    assert!(server.homeserver.sends().is_empty());
}

// ============================================================================
// Dispatch Contract Tests
// ============================================================================

#[tokio::test]
async fn test_wrong_secret_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let path = format!("/webhook/wrong-secret/devguard?room_id={room}");
    let response = server
        .post_raw(&path, &devguard_critical().to_string())
        .await
        .unwrap();

    assert_status(response, 404).await.unwrap();
    assert!(server.homeserver.sends().is_empty());
}

#[tokio::test]
async fn test_wrong_secret_looks_like_unknown_path() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let path = format!("/webhook/wrong-secret/devguard?room_id={room}");
    let wrong_secret = server
        .post_raw(&path, &devguard_critical().to_string())
        .await
        .unwrap();
    let unknown_path = server
        .post_raw("/no/such/route", &devguard_critical().to_string())
        .await
        .unwrap();

    assert_eq!(wrong_secret.status().as_u16(), 404);
    assert_eq!(unknown_path.status().as_u16(), 404);

    // Identical bodies, so probing cannot map the webhook namespace
    let wrong_secret_body = wrong_secret.text().await.unwrap();
    let unknown_path_body = unknown_path.text().await.unwrap();
    assert_eq!(wrong_secret_body, unknown_path_body);
}

#[tokio::test]
async fn test_missing_room_id_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let path = "/webhook/test-secret/devguard";
    let response = server
        .post_raw(path, &devguard_critical().to_string())
        .await
        .unwrap();
    let body = assert_json(response, 400).await.unwrap();

    assert_eq!(body["error"]["code"], "MISSING_ROOM_ID");
    assert!(server.homeserver.sends().is_empty());
}

#[tokio::test]
async fn test_unknown_source_type_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("jira", &room, &json!({"event": "created"}))
        .await
        .unwrap();
    let body = assert_json(response, 400).await.unwrap();

    assert_eq!(body["error"]["code"], "UNKNOWN_SOURCE_TYPE");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = unique_room();

    let path = server.webhook_path("devguard", &room);
    let response = server.post_raw(&path, "this is not json").await.unwrap();
    let body = assert_json(response, 400).await.unwrap();

    assert_eq!(body["error"]["code"], "EVALUATION_ERROR");
    assert!(server.homeserver.sends().is_empty());
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Delivery Failure Tests
// ============================================================================

#[tokio::test]
async fn test_homeserver_failure_maps_to_server_error() {
    let homeserver = MockHomeserver::start_with_response(
        500,
        r#"{"errcode":"M_UNKNOWN","error":"Internal server error"}"#,
    )
    .await
    .expect("Failed to start homeserver");
    let server = TestServer::start_with_homeserver(homeserver)
        .await
        .expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("devguard", &room, &devguard_critical())
        .await
        .unwrap();
    let body = assert_json(response, 500).await.unwrap();

    assert_eq!(body["error"]["code"], "DELIVERY_FAILED");
    assert_eq!(body["error"]["details"]["homeserver_status"], 500);

    // Exactly one attempt, no retry.
    assert_eq!(server.homeserver.sends().len(), 1);
}

#[tokio::test]
async fn test_forbidden_room_maps_to_server_error() {
    let homeserver = MockHomeserver::start_with_response(
        403,
        r#"{"errcode":"M_FORBIDDEN","error":"User not in room"}"#,
    )
    .await
    .expect("Failed to start homeserver");
    let server = TestServer::start_with_homeserver(homeserver)
        .await
        .expect("Failed to start server");
    let room = unique_room();

    let response = server
        .post_webhook("devguard", &room, &devguard_critical())
        .await
        .unwrap();
    let body = assert_json(response, 500).await.unwrap();

    assert_eq!(body["error"]["code"], "DELIVERY_FAILED");
    assert!(body["error"]["details"]["homeserver_body"]
        .as_str()
        .unwrap()
        .contains("M_FORBIDDEN"));
}
