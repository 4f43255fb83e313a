//! The HTTP request core shared by every resource group.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::credentials::{CredentialSource, NoCredentials, NullSink, UnauthorizedSink};
use crate::error::ApiError;
use crate::resources::{
    auth::AuthApi, class_registrations::ClassRegistrationsApi, equipment::EquipmentApi,
    gym_classes::GymClassesApi, memberships::MembershipsApi, payments::PaymentsApi,
    training_sessions::TrainingSessionsApi, users::UsersApi,
};

/// Hung requests are cut off rather than left pending forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether the 401 interceptor applies to a request.
///
/// Signin/signup are exempt: a 401 there is a credential problem handled by
/// the login screen, not a session to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Authenticated,
    AuthEndpoint,
}

/// Shared HTTP client for the backend REST surface.
///
/// Every outgoing request carries `Authorization: Bearer <token>` when the
/// credential source has one; the header is omitted otherwise. Every 401 on
/// an authenticated call clears the credentials and notifies the sink, no
/// matter which resource triggered it.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    credentials: Arc<dyn CredentialSource>,
    unauthorized: Arc<dyn UnauthorizedSink>,
}

impl ApiClient {
    /// Client with no credentials attached (probes, signin-only flows).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            credentials: Arc::new(NoCredentials),
            unauthorized: Arc::new(NullSink),
        }
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_unauthorized_sink(mut self, sink: Arc<dyn UnauthorizedSink>) -> Self {
        self.unauthorized = sink;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── resource groups ──────────────────────────────────────────────────

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn memberships(&self) -> MembershipsApi<'_> {
        MembershipsApi::new(self)
    }

    pub fn equipment(&self) -> EquipmentApi<'_> {
        EquipmentApi::new(self)
    }

    pub fn gym_classes(&self) -> GymClassesApi<'_> {
        GymClassesApi::new(self)
    }

    pub fn training_sessions(&self) -> TrainingSessionsApi<'_> {
        TrainingSessionsApi::new(self)
    }

    pub fn class_registrations(&self) -> ClassRegistrationsApi<'_> {
        ClassRegistrationsApi::new(self)
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    // ── request helpers used by the resource modules ─────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, &[], None, Scope::Authenticated)
            .await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, query, None, Scope::Authenticated)
            .await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], Some(body), Scope::Authenticated)
            .await
    }

    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<(), T>(Method::POST, path, query, None, Scope::Authenticated)
            .await
    }

    pub(crate) async fn post_auth<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], Some(body), Scope::AuthEndpoint)
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, &[], Some(body), Scope::Authenticated)
            .await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::PUT, path, &[], None, Scope::Authenticated)
            .await
    }

    pub(crate) async fn put_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<(), T>(Method::PUT, path, query, None, Scope::Authenticated)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::DELETE, path, &[], None, Scope::Authenticated)
            .await
    }

    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        scope: Scope,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url).timeout(REQUEST_TIMEOUT);

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = self.credentials.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED && scope == Scope::Authenticated {
            self.invalidate_session();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_message(resp).await,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if bytes.is_empty() {
            // 204-style responses decode as JSON null.
            return serde_json::from_slice(b"null").map_err(|e| ApiError::Decode(e.to_string()));
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Centralized reaction to an authorization failure: clear the store,
    /// then notify. Notification only fires when a live token was actually
    /// cleared, so repeated 401s collapse into one.
    fn invalidate_session(&self) {
        let had_token = self.credentials.token().is_some();
        self.credentials.clear();
        if had_token {
            tracing::warn!("authenticated request rejected (401); stored session cleared");
            self.unauthorized.on_unauthorized();
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Pull the backend's `{message}` out of an error response, falling back to
/// the status reason when the body is not the expected shape.
async fn extract_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}
