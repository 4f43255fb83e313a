//! `/api/users` — account administration.

use serde_json::Value;

use gymdesk_core::UserId;

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/users").await
    }

    pub async fn get(&self, id: UserId) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/users/{id}")).await
    }

    pub async fn update(&self, id: UserId, data: &Value) -> Result<Value, ApiError> {
        self.client.put(&format!("/api/users/{id}"), data).await
    }

    pub async fn delete(&self, id: UserId) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/users/{id}")).await
    }
}
