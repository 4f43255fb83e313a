//! `/api/auth` — signin and signup.

use serde::{Deserialize, Serialize};

use gymdesk_core::UserId;

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful signin.
///
/// `roles` is the granted-authority list (`ROLE_ADMIN`, ...); `role` is the
/// backend's own single-role field, which the client ignores in favor of
/// deriving the primary role from `roles`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Requested roles, lowercase (`member`, `trainer`, `staff`, `admin`).
    pub role: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/auth/signin`. Outside the 401 interceptor: bad
    /// credentials come back as a plain [`ApiError::Api`] for the login
    /// screen to display.
    pub async fn signin(&self, request: &SigninRequest) -> Result<SigninResponse, ApiError> {
        self.client.post_auth("/api/auth/signin", request).await
    }

    /// `POST /api/auth/signup`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.client.post_auth("/api/auth/signup", request).await
    }
}
