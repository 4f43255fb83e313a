//! Black-box tests for the API client against a stub backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use gymdesk_client::{ApiClient, ApiError, CredentialSource, SigninRequest, UnauthorizedSink};

const VALID_TOKEN: &str = "stub-jwt-token";

#[derive(Default)]
struct TestState {
    /// Authorization header of every resource request, in arrival order.
    seen_authorization: Mutex<Vec<Option<String>>>,
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    state: Arc<TestState>,
}

impl TestServer {
    async fn spawn() -> Self {
        let state = Arc::new(TestState::default());
        let app = Router::new()
            .route("/api/auth/signin", post(signin))
            .route("/api/users", get(list_users))
            .route("/api/memberships/stats/active-count", get(active_count))
            .route("/api/memberships/check/:id", get(check_active))
            .route("/api/equipment", post(create_equipment))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            handle,
            state,
        }
    }

    fn last_authorization(&self) -> Option<Option<String>> {
        self.state.seen_authorization.lock().unwrap().last().cloned()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Deserialize)]
struct Creds {
    username: String,
    password: String,
}

async fn signin(Json(creds): Json<Creds>) -> Response {
    if creds.username == "admin" && creds.password == "admin123" {
        Json(json!({
            "accessToken": VALID_TOKEN,
            "tokenType": "Bearer",
            "id": 1,
            "username": "admin",
            "email": "admin@gym.local",
            "firstName": "Ada",
            "lastName": "Minton",
            "role": "ADMIN",
            "roles": ["ROLE_ADMIN"],
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Bad credentials" })),
        )
            .into_response()
    }
}

async fn list_users(State(state): State<Arc<TestState>>, headers: HeaderMap) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen_authorization.lock().unwrap().push(auth.clone());

    if auth.as_deref() == Some(&format!("Bearer {VALID_TOKEN}")) {
        Json(json!([
            { "id": 1, "username": "admin" },
            { "id": 2, "username": "casey" },
        ]))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Full authentication is required" })),
        )
            .into_response()
    }
}

async fn active_count() -> Json<serde_json::Value> {
    Json(json!(7))
}

async fn check_active(Path(_id): Path<i64>) -> Json<serde_json::Value> {
    Json(json!(true))
}

async fn create_equipment() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "equipment name must not be blank" })),
    )
        .into_response()
}

/// Minimal credential holder standing in for the persistent token store.
#[derive(Default)]
struct StubCredentials {
    token: Mutex<Option<String>>,
}

impl StubCredentials {
    fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialSource for StubCredentials {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.token.lock().unwrap().take();
    }
}

#[derive(Default)]
struct CountingSink {
    fired: AtomicUsize,
}

impl UnauthorizedSink for CountingSink {
    fn on_unauthorized(&self) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn signin_returns_token_and_roles() {
    let srv = TestServer::spawn().await;
    let client = ApiClient::new(srv.base_url.clone());

    let resp = client
        .auth()
        .signin(&SigninRequest {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(resp.access_token, VALID_TOKEN);
    assert_eq!(resp.roles, vec!["ROLE_ADMIN".to_string()]);
    assert_eq!(resp.username, "admin");
}

#[tokio::test]
async fn signin_rejection_stays_local() {
    let srv = TestServer::spawn().await;
    let credentials = Arc::new(StubCredentials::with_token("stale"));
    let sink = Arc::new(CountingSink::default());
    let client = ApiClient::new(srv.base_url.clone())
        .with_credentials(credentials.clone())
        .with_unauthorized_sink(sink.clone());

    let err = client
        .auth()
        .signin(&SigninRequest {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    // A 401 from the signin endpoint is a credential problem, not a
    // session invalidation.
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
    assert!(credentials.token().is_some());
    assert_eq!(sink.fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn resource_calls_carry_the_stored_token() {
    let srv = TestServer::spawn().await;
    let client = ApiClient::new(srv.base_url.clone())
        .with_credentials(Arc::new(StubCredentials::with_token(VALID_TOKEN)));

    let users = client.users().list().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(
        srv.last_authorization(),
        Some(Some(format!("Bearer {VALID_TOKEN}")))
    );
}

#[tokio::test]
async fn header_is_omitted_without_a_token() {
    let srv = TestServer::spawn().await;
    let sink = Arc::new(CountingSink::default());
    let client = ApiClient::new(srv.base_url.clone())
        .with_credentials(Arc::new(StubCredentials::default()))
        .with_unauthorized_sink(sink.clone());

    let err = client.users().list().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(srv.last_authorization(), Some(None));
    // No token was lost, so nothing to announce.
    assert_eq!(sink.fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unauthorized_clears_credentials_and_notifies_once() {
    let srv = TestServer::spawn().await;
    let credentials = Arc::new(StubCredentials::with_token("expired-token"));
    let sink = Arc::new(CountingSink::default());
    let client = ApiClient::new(srv.base_url.clone())
        .with_credentials(credentials.clone())
        .with_unauthorized_sink(sink.clone());

    let err = client.users().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(credentials.token(), None);
    assert_eq!(sink.fired.load(Ordering::SeqCst), 1);

    // A second rejected request finds the store already empty.
    let err = client.users().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(sink.fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn backend_message_is_surfaced_verbatim() {
    let srv = TestServer::spawn().await;
    let client = ApiClient::new(srv.base_url.clone())
        .with_credentials(Arc::new(StubCredentials::with_token(VALID_TOKEN)));

    let err = client.equipment().create(&json!({})).await.unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "equipment name must not be blank");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn scalar_payloads_decode() {
    let srv = TestServer::spawn().await;
    let client = ApiClient::new(srv.base_url.clone())
        .with_credentials(Arc::new(StubCredentials::with_token(VALID_TOKEN)));

    assert_eq!(client.memberships().active_count().await.unwrap(), 7);
    assert!(
        client
            .memberships()
            .check_user_has_active(gymdesk_core::UserId::new(1))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on port 9; connection is refused immediately.
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.users().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
