//! Integration tests for the AI Jurisdiction backend.

use reqwest::{redirect, Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::{Config, LogFormat};
use crate::storage::StorageBackend;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let backend = StorageBackend::File(temp_dir.path().join("session.json"));
        Self::start(backend, true, temp_dir).await
    }

    async fn with(backend: StorageBackend, seed_cases: bool) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self::start(backend, seed_cases, temp_dir).await
    }

    async fn start(session_storage: StorageBackend, seed_cases: bool, temp_dir: TempDir) -> Self {
        let config = Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            session_storage,
            seed_cases,
        };

        let app = create_router(AppState::new(&config));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .unwrap();

        TestFixture {
            client,
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let resp = self
            .client
            .request(method, self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/version").await;
    assert_eq!(status, 200);
    assert_eq!(body["service"], "aijurisdiction-backend");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_auth_callback_persists_session() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get_json("/api/session").await;
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());

    let resp = fixture
        .client
        .get(fixture.url("/auth/callback"))
        .query(&[
            ("provider", "google"),
            ("id", "g-123"),
            ("name", "Ada Lovelace"),
            ("avatarUrl", "https://cdn.example/ada.png"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    let (status, body) = fixture.get_json("/api/session").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["data"],
        json!({
            "id": "g-123",
            "name": "Ada Lovelace",
            "provider": "google",
            "avatarUrl": "https://cdn.example/ada.png"
        })
    );

    // Logout
    let resp = fixture
        .client
        .delete(fixture.url("/api/session"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let (_, body) = fixture.get_json("/api/session").await;
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_auth_callback_rejects_incomplete_payload() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/auth/callback"))
        .query(&[("provider", "github"), ("id", "1"), ("name", "Ada")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["message"],
        "Invalid auth callback payload. Required: provider, id, and name."
    );

    let (_, body) = fixture.get_json("/api/session").await;
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_session_with_storage_disabled() {
    let fixture = TestFixture::with(StorageBackend::Disabled, true).await;

    let resp = fixture
        .client
        .get(fixture.url("/auth/callback?provider=x&id=x-1&name=Bo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (status, body) = fixture.get_json("/api/session").await;
    assert_eq!(status, 200);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_mock_sign_in() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/auth/sign-in",
            json!({ "email": "user@example.com", "password": "badpass" }),
        )
        .await;
    assert_eq!(status, 401);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/auth/sign-in",
            json!({ "email": "admin@admin.com", "password": "admin123" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["isAuthenticated"], true);
    assert_eq!(body["data"]["user"]["name"], "Admin");

    let (_, body) = fixture.get_json("/api/auth").await;
    assert_eq!(body["data"]["isAuthenticated"], true);

    let (_, body) = fixture
        .send_json(reqwest::Method::POST, "/api/auth/sign-out", json!({}))
        .await;
    assert_eq!(body["data"]["isAuthenticated"], false);
    assert!(body["data"]["user"].is_null());
}

#[tokio::test]
async fn test_case_listing() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/cases").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["cases"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"]["activeCaseId"], "case-001");
    assert_eq!(body["data"]["activeCase"]["title"], "Keystone Holdings Intake");
    assert_eq!(body["data"]["activeCase"]["status"], "In progress");
    assert_eq!(
        body["data"]["activeCase"]["workspace"]["nextAction"],
        "Schedule a 15-minute voice session with the AI agent to confirm scope."
    );

    let (status, body) = fixture.get_json("/api/cases/case-003").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["selectedMode"], "Live");

    let (status, body) = fixture.get_json("/api/cases/case-404").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_case_becomes_active_and_first() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(reqwest::Method::POST, "/api/cases", json!({}))
        .await;
    assert_eq!(status, 200);
    let created = body["data"].clone();
    assert_eq!(created["title"], "New matter 5");
    assert_eq!(created["selectedRole"], "General Counsel");
    assert_eq!(created["selectedMode"], "Draft");
    assert_eq!(created["interactionHistory"].as_array().unwrap().len(), 2);

    let (_, body) = fixture.get_json("/api/cases").await;
    let cases = body["data"]["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 5);
    assert_eq!(cases[0]["id"], created["id"]);
    assert_eq!(cases[1]["id"], "case-001");
    assert_eq!(body["data"]["activeCaseId"], created["id"]);

    let (_, body) = fixture.get_json("/api/cases/active").await;
    assert_eq!(body["data"]["id"], created["id"]);
}

#[tokio::test]
async fn test_set_active_case_falls_back() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/cases/active",
            json!({ "caseId": "case-002" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["activeCase"]["id"], "case-002");

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/cases/active",
            json!({ "caseId": "case-404" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["activeCaseId"], "case-404");
    assert_eq!(body["data"]["activeCase"]["id"], "case-001");
}

#[tokio::test]
async fn test_empty_workspace_has_no_active_case() {
    let fixture = TestFixture::with(StorageBackend::Memory, false).await;

    let (status, body) = fixture.get_json("/api/cases/active").await;
    assert_eq!(status, 200);
    assert!(body["data"].is_null());

    let (_, body) = fixture.get_json("/api/cases").await;
    assert!(body["data"]["cases"].as_array().unwrap().is_empty());
    assert!(body["data"]["activeCaseId"].is_null());
}

#[tokio::test]
async fn test_update_role_and_mode() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PATCH,
            "/api/cases/case-002",
            json!({ "title": "Atlas Renewal", "status": "Scheduled" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["title"], "Atlas Renewal");
    assert_eq!(body["data"]["status"], "Scheduled");
    assert_eq!(body["data"]["selectedRole"], "Contract Analyst");

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/cases/case-002/role",
            json!({ "role": "Litigation Lead" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["selectedRole"], "Litigation Lead");

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/cases/case-002/mode",
            json!({ "mode": "Archive" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["selectedMode"], "Archive");
    assert_eq!(body["data"]["title"], "Atlas Renewal");

    let (status, _) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/cases/case-404/mode",
            json!({ "mode": "Archive" }),
        )
        .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_add_interaction() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/cases/case-001/interactions",
            json!({ "actor": "You", "message": "hello" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["actor"], "You");
    assert_eq!(body["data"]["message"], "hello");

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/cases/case-001/interactions",
            json!({ "actor": "You", "message": "   " }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = fixture.get_json("/api/cases/case-001").await;
    let history = body["data"]["interactionHistory"].as_array().unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0]["id"], "case-001-1");
    assert_eq!(history[3]["message"], "hello");

    let (status, _) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/cases/case-404/interactions",
            json!({ "actor": "You", "message": "hello" }),
        )
        .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_chat_session_and_messages() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(reqwest::Method::POST, "/v1/chat/sessions", json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["state"], "active");
    let session_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/v1/chat/messages",
            json!({ "sessionId": session_id, "role": "user", "content": "Hello API" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["content"], "Hello API");

    let (status, body) = fixture
        .get_json(&format!("/v1/chat/sessions/{}/messages", session_id))
        .await;
    assert_eq!(status, 200);
    let messages = body["data"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
}

#[tokio::test]
async fn test_chat_unknown_session() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/v1/chat/messages",
            json!({
                "sessionId": "00000000-0000-0000-0000-000000000000",
                "role": "user",
                "content": "Hi"
            }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = fixture
        .get_json("/v1/chat/sessions/00000000-0000-0000-0000-000000000000/messages")
        .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_invalid_body_uses_error_envelope() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PATCH,
            "/api/cases/case-002",
            json!({ "status": "Paused" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (_, body) = fixture.get_json("/api/cases/case-002").await;
    assert_eq!(body["data"]["status"], "On hold");

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/sign-in"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_chat_message_with_attachment() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture
        .send_json(reqwest::Method::POST, "/v1/chat/sessions", json!({}))
        .await;
    let session_id = body["data"]["id"].as_str().unwrap().to_string();

    let attachment = json!({
        "id": "7d9f0c1e-2b3a-4c5d-8e6f-0a1b2c3d4e5f",
        "filename": "engagement-letter.pdf",
        "contentType": "application/pdf"
    });
    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/v1/chat/messages",
            json!({
                "sessionId": session_id,
                "role": "user",
                "content": "See attached",
                "attachments": [attachment.clone()]
            }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["attachments"], json!([attachment]));
}
