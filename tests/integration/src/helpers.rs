//! Test helpers for integration tests
//!
//! Provides utilities for spawning the bridge with a scripted homeserver
//! stand-in and for making HTTP requests against it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use bridge_api::{create_app, create_app_state};
use bridge_common::{
    AppConfig, AppSettings, Environment, MatrixSettings, ServerConfig, WebhookSettings,
};
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Shared secret used by every test server
pub const TEST_SECRET: &str = "test-secret";

/// Access token the test bridge presents to the homeserver
pub const TEST_TOKEN: &str = "syt_test_token";

/// One send request captured by the mock homeserver
#[derive(Debug, Clone)]
pub struct RecordedSend {
    /// Decoded room id from the request path
    pub room: String,
    /// Value of the Authorization header, if any
    pub authorization: Option<String>,
    /// JSON request body
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    sends: Arc<Mutex<Vec<RecordedSend>>>,
    status: StatusCode,
    body: String,
}

/// Scripted stand-in for a Matrix homeserver
///
/// Records every send-message request and answers with a fixed status and
/// body so tests can drive both success and failure paths.
pub struct MockHomeserver {
    pub addr: SocketAddr,
    sends: Arc<Mutex<Vec<RecordedSend>>>,
    _handle: JoinHandle<()>,
}

impl MockHomeserver {
    /// Start a homeserver that accepts every send
    pub async fn start() -> Result<Self> {
        Self::start_with_response(200, r#"{"event_id":"$1:example.org"}"#).await
    }

    /// Start a homeserver that answers every send with the given response
    pub async fn start_with_response(status: u16, body: &str) -> Result<Self> {
        let sends: Arc<Mutex<Vec<RecordedSend>>> = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            sends: sends.clone(),
            status: StatusCode::from_u16(status)?,
            body: body.to_string(),
        };

        let app = Router::new()
            .route(
                "/_matrix/client/v3/rooms/:room/send/m.room.message",
                post(record_send),
            )
            .with_state(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            sends,
            _handle: handle,
        })
    }

    /// Base URL of the homeserver
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All send requests recorded so far
    pub fn sends(&self) -> Vec<RecordedSend> {
        self.sends.lock().unwrap().clone()
    }
}

async fn record_send(
    State(state): State<MockState>,
    Path(room): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.sends.lock().unwrap().push(RecordedSend {
        room,
        authorization,
        body,
    });

    (state.status, state.body.clone())
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub homeserver: MockHomeserver,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a bridge wired to a fresh accepting homeserver
    pub async fn start() -> Result<Self> {
        let homeserver = MockHomeserver::start().await?;
        Self::start_with_homeserver(homeserver).await
    }

    /// Start a bridge against a pre-configured homeserver
    pub async fn start_with_homeserver(homeserver: MockHomeserver) -> Result<Self> {
        let config = test_config(&homeserver.url());

        // Create app state
        let state = create_app_state(config)?;

        // Build application
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            homeserver,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Webhook path scoped by the test secret
    pub fn webhook_path(&self, source: &str, room: &str) -> String {
        format!("/webhook/{TEST_SECRET}/{source}?room_id={room}")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// POST a raw body to a path
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    /// POST a webhook payload for a source type
    pub async fn post_webhook(&self, source: &str, room: &str, payload: &Value) -> Result<Response> {
        self.post_raw(&self.webhook_path(source, room), &payload.to_string())
            .await
    }
}

/// Create a bridge configuration pointing at the given homeserver
pub fn test_config(homeserver_url: &str) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "hookbridge-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        matrix: MatrixSettings {
            homeserver: homeserver_url.to_string(),
            access_token: TEST_TOKEN.to_string(),
            send_timeout_secs: 5,
        },
        webhook: WebhookSettings {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Assert response status and return the body text
pub async fn assert_status(response: Response, expected_status: u16) -> Result<String> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status and parse the JSON body
pub async fn assert_json(response: Response, expected_status: u16) -> Result<Value> {
    let body = assert_status(response, expected_status).await?;
    Ok(serde_json::from_str(&body)?)
}
