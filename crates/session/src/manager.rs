//! The process-wide session and its mutation surface.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use gymdesk_auth::roles::{Role, primary_role};
use gymdesk_auth::session::{Session, SessionState, UserProfile};
use gymdesk_client::resources::auth::{SigninRequest, SignupRequest};
use gymdesk_client::{ApiClient, UnauthorizedSink};

use crate::store::{KEY_TOKEN, KEY_USER, SessionStore, StoreCredentials};

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Failures surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login or registration was not accepted. Carries the backend's
    /// message when it sent one, a generic fallback otherwise.
    #[error("{0}")]
    Rejected(String),

    /// The profile could not be encoded for the store.
    #[error("failed to persist session: {0}")]
    Persist(String),
}

/// Sink resetting the in-memory state when the 401 interceptor fires.
/// The interceptor has already cleared the store by then.
struct ResetStateSink {
    state: Arc<RwLock<SessionState>>,
}

impl UnauthorizedSink for ResetStateSink {
    fn on_unauthorized(&self) {
        *self.state.write().unwrap() = SessionState::Anonymous;
    }
}

/// Single authoritative view of "who is logged in".
///
/// Mutations happen through `restore`/`login`/`register`/`logout` and the
/// 401 interceptor, nowhere else. Screens get read access plus the shared
/// [`ApiClient`].
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    client: ApiClient,
    state: Arc<RwLock<SessionState>>,
}

impl SessionManager {
    pub fn new(api_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        let state = Arc::new(RwLock::new(SessionState::Unknown));
        let client = ApiClient::new(api_url)
            .with_credentials(Arc::new(StoreCredentials(store.clone())))
            .with_unauthorized_sink(Arc::new(ResetStateSink {
                state: state.clone(),
            }));
        Self {
            store,
            client,
            state,
        }
    }

    /// Read the store once and resolve `Unknown` into a concrete state.
    ///
    /// Authenticated only when both entries are present and the profile
    /// parses; the primary role is re-derived from the stored authority
    /// list on every load.
    pub fn restore(&self) -> SessionState {
        let next = match (self.store.get(KEY_TOKEN), self.store.get(KEY_USER)) {
            (Some(token), Some(user)) => match serde_json::from_str::<UserProfile>(&user) {
                Ok(mut profile) => {
                    profile.role = primary_role(&profile.roles);
                    SessionState::Authenticated(Session { token, profile })
                }
                Err(e) => {
                    tracing::warn!("stored profile unreadable ({e}); discarding session");
                    self.store.clear();
                    SessionState::Anonymous
                }
            },
            _ => SessionState::Anonymous,
        };
        *self.state.write().unwrap() = next.clone();
        next
    }

    /// Authenticate against the backend and persist the session.
    ///
    /// The token lands in the store before the in-memory state flips, so
    /// any request issued after `login` returns observes the token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, SessionError> {
        let request = SigninRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .auth()
            .signin(&request)
            .await
            .map_err(|e| rejected(&e, LOGIN_FALLBACK))?;

        let roles: Vec<Role> = resp.roles.into_iter().map(Role::from).collect();
        let profile = UserProfile::new(
            resp.id,
            resp.username,
            resp.email,
            resp.first_name,
            resp.last_name,
            roles,
        );
        let encoded =
            serde_json::to_string(&profile).map_err(|e| SessionError::Persist(e.to_string()))?;
        let session = Session {
            token: resp.access_token,
            profile,
        };

        self.store.set(KEY_TOKEN, &session.token);
        self.store.set(KEY_USER, &encoded);
        *self.state.write().unwrap() = SessionState::Authenticated(session.clone());

        tracing::info!(username = %session.profile.username, "signed in");
        Ok(session)
    }

    /// Relay a signup. Session state is untouched either way; the caller
    /// routes the user to the login screen on success.
    pub async fn register(&self, request: &SignupRequest) -> Result<String, SessionError> {
        self.client
            .auth()
            .signup(request)
            .await
            .map(|resp| resp.message)
            .map_err(|e| rejected(&e, REGISTER_FALLBACK))
    }

    /// Drop the session locally. The backend is not informed; the token
    /// simply stops being sent.
    pub fn logout(&self) {
        self.store.clear();
        *self.state.write().unwrap() = SessionState::Anonymous;
        tracing::info!("signed out");
    }

    pub fn state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().unwrap().session().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().unwrap().is_authenticated()
    }

    /// The shared API client; resource calls made through it carry the
    /// stored token automatically.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

fn rejected(err: &gymdesk_client::ApiError, fallback: &str) -> SessionError {
    SessionError::Rejected(err.backend_message().unwrap_or(fallback).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn stored_profile() -> String {
        serde_json::json!({
            "id": 1,
            "username": "admin",
            "email": "admin@gym.local",
            "firstName": "Ada",
            "lastName": "Minton",
            "roles": ["ROLE_ADMIN"],
            "role": "ADMIN",
        })
        .to_string()
    }

    fn manager_with_store(store: Arc<MemoryStore>) -> SessionManager {
        // The URL is never contacted by these tests.
        SessionManager::new("http://127.0.0.1:9", store)
    }

    #[test]
    fn starts_unknown_until_restored() {
        let manager = manager_with_store(Arc::new(MemoryStore::default()));
        assert_eq!(manager.state(), SessionState::Unknown);
    }

    #[test]
    fn restore_with_both_entries_is_authenticated() {
        let store = Arc::new(MemoryStore::default());
        store.set(KEY_TOKEN, "stored-token");
        store.set(KEY_USER, &stored_profile());

        let manager = manager_with_store(store);
        let state = manager.restore();

        let session = state.session().expect("expected authenticated state");
        assert_eq!(session.token, "stored-token");
        assert_eq!(session.profile.primary_role(), Some(&Role::ADMIN));
        assert!(manager.is_authenticated());
    }

    #[test]
    fn restore_without_token_is_anonymous() {
        let store = Arc::new(MemoryStore::default());
        store.set(KEY_USER, &stored_profile());

        let manager = manager_with_store(store);
        assert_eq!(manager.restore(), SessionState::Anonymous);
    }

    #[test]
    fn restore_rederives_primary_role() {
        let store = Arc::new(MemoryStore::default());
        store.set(KEY_TOKEN, "t");
        // Stored role contradicts the authority list; the list wins.
        let mut profile: serde_json::Value = serde_json::from_str(&stored_profile()).unwrap();
        profile["roles"] = serde_json::json!(["ROLE_STAFF", "ROLE_MEMBER"]);
        profile["role"] = serde_json::json!("ADMIN");
        store.set(KEY_USER, &profile.to_string());

        let manager = manager_with_store(store);
        let state = manager.restore();
        assert_eq!(
            state.session().unwrap().profile.primary_role(),
            Some(&Role::STAFF)
        );
    }

    #[test]
    fn corrupt_profile_discards_the_session() {
        let store = Arc::new(MemoryStore::default());
        store.set(KEY_TOKEN, "t");
        store.set(KEY_USER, "not json");

        let manager = manager_with_store(store.clone());
        assert_eq!(manager.restore(), SessionState::Anonymous);
        assert_eq!(store.get(KEY_TOKEN), None);
    }

    #[test]
    fn logout_clears_store_and_state() {
        let store = Arc::new(MemoryStore::default());
        store.set(KEY_TOKEN, "t");
        store.set(KEY_USER, &stored_profile());

        let manager = manager_with_store(store.clone());
        manager.restore();
        manager.logout();

        assert_eq!(manager.state(), SessionState::Anonymous);
        assert_eq!(store.get(KEY_TOKEN), None);
        assert_eq!(store.get(KEY_USER), None);
    }
}
