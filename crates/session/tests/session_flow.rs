//! End-to-end session flows against a stub backend.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use gymdesk_auth::Role;
use gymdesk_client::{ApiError, SignupRequest};
use gymdesk_session::{FileStore, KEY_TOKEN, KEY_USER, MemoryStore, SessionManager, SessionStore};

const VALID_TOKEN: &str = "stub-session-token";

#[derive(Default)]
struct TestState {
    signin_count: AtomicUsize,
    token_revoked: AtomicBool,
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
            .route("/api/auth/signup", post(signup))
            .route("/api/users", get(list_users))
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

    fn revoke_token(&self) {
        self.state.token_revoked.store(true, Ordering::SeqCst);
    }

    fn signin_count(&self) -> usize {
        self.state.signin_count.load(Ordering::SeqCst)
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

async fn signin(
    axum::extract::State(state): axum::extract::State<Arc<TestState>>,
    Json(creds): Json<Creds>,
) -> Response {
    state.signin_count.fetch_add(1, Ordering::SeqCst);
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

async fn signup(Json(_body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    Json(json!({ "message": "User registered successfully!" }))
}

async fn list_users(
    axum::extract::State(state): axum::extract::State<Arc<TestState>>,
    headers: HeaderMap,
) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen_authorization.lock().unwrap().push(auth.clone());

    let authorized = !state.token_revoked.load(Ordering::SeqCst)
        && auth.as_deref() == Some(&format!("Bearer {VALID_TOKEN}"));
    if authorized {
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

#[tokio::test]
async fn login_then_list_users_succeeds() {
    let srv = TestServer::spawn().await;
    let manager = SessionManager::new(srv.base_url.clone(), Arc::new(MemoryStore::default()));
    manager.restore();

    let session = manager.login("admin", "admin123").await.unwrap();
    assert_eq!(session.profile.primary_role(), Some(&Role::ADMIN));

    let users = manager.client().users().list().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(
        srv.last_authorization(),
        Some(Some(format!("Bearer {VALID_TOKEN}")))
    );
}

#[tokio::test]
async fn login_persists_token_and_profile() {
    let srv = TestServer::spawn().await;
    let store = Arc::new(MemoryStore::default());
    let manager = SessionManager::new(srv.base_url.clone(), store.clone());
    manager.restore();

    manager.login("admin", "admin123").await.unwrap();

    assert_eq!(store.get(KEY_TOKEN).as_deref(), Some(VALID_TOKEN));
    let user: serde_json::Value =
        serde_json::from_str(&store.get(KEY_USER).unwrap()).unwrap();
    assert_eq!(user["username"], "admin");
    assert_eq!(user["role"], "ADMIN");
    assert!(manager.is_authenticated());
}

#[tokio::test]
async fn failed_login_surfaces_the_backend_message() {
    let srv = TestServer::spawn().await;
    let store = Arc::new(MemoryStore::default());
    let manager = SessionManager::new(srv.base_url.clone(), store.clone());
    manager.restore();

    let err = manager.login("admin", "nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Bad credentials");
    assert!(!manager.is_authenticated());
    assert_eq!(store.get(KEY_TOKEN), None);
}

#[tokio::test]
async fn logout_drops_the_token_from_requests() {
    let srv = TestServer::spawn().await;
    let manager = SessionManager::new(srv.base_url.clone(), Arc::new(MemoryStore::default()));
    manager.restore();
    manager.login("admin", "admin123").await.unwrap();

    manager.logout();
    assert!(!manager.is_authenticated());

    let err = manager.client().users().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(srv.last_authorization(), Some(None));
}

#[tokio::test]
async fn session_rehydrates_from_disk_without_the_backend() {
    let srv = TestServer::spawn().await;
    let dir = tempfile::tempdir().unwrap();

    {
        let store = Arc::new(FileStore::new(dir.path()));
        let manager = SessionManager::new(srv.base_url.clone(), store);
        manager.restore();
        manager.login("admin", "admin123").await.unwrap();
    }

    // A fresh process over the same data directory.
    let store = Arc::new(FileStore::new(dir.path()));
    let manager = SessionManager::new(srv.base_url.clone(), store);
    let state = manager.restore();

    let session = state.session().expect("expected rehydrated session");
    assert_eq!(session.token, VALID_TOKEN);
    assert_eq!(session.profile.username, "admin");
    assert_eq!(session.profile.primary_role(), Some(&Role::ADMIN));
    // Only the original login hit the signin endpoint.
    assert_eq!(srv.signin_count(), 1);
}

#[tokio::test]
async fn revoked_token_invalidates_the_whole_session() {
    let srv = TestServer::spawn().await;
    let store = Arc::new(MemoryStore::default());
    let manager = SessionManager::new(srv.base_url.clone(), store.clone());
    manager.restore();
    manager.login("admin", "admin123").await.unwrap();

    srv.revoke_token();

    let err = manager.client().users().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(store.get(KEY_TOKEN), None);
    assert_eq!(store.get(KEY_USER), None);
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn register_relays_the_message_and_keeps_state() {
    let srv = TestServer::spawn().await;
    let store = Arc::new(MemoryStore::default());
    let manager = SessionManager::new(srv.base_url.clone(), store.clone());
    manager.restore();

    let message = manager
        .register(&SignupRequest {
            first_name: "Casey".to_string(),
            last_name: "Jones".to_string(),
            username: "casey".to_string(),
            email: "casey@gym.local".to_string(),
            password: "hunter2".to_string(),
            role: vec!["member".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(message, "User registered successfully!");
    assert!(!manager.is_authenticated());
    assert_eq!(store.get(KEY_TOKEN), None);
}
