//! `/api/memberships` — membership records and their filter views.

use serde_json::Value;

use gymdesk_core::{MembershipId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct MembershipsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MembershipsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/memberships").await
    }

    pub async fn get(&self, id: MembershipId) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/memberships/{id}")).await
    }

    pub async fn by_user(&self, user_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/memberships/user/{user_id}"))
            .await
    }

    pub async fn active_by_user(&self, user_id: UserId) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/memberships/user/{user_id}/active"))
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/memberships/status/{status}"))
            .await
    }

    /// Memberships whose end date falls inside the given window
    /// (ISO-8601 dates, passed through unvalidated).
    pub async fn expiring(&self, start_date: &str, end_date: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/memberships/expiring",
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn expired(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/memberships/expired").await
    }

    pub async fn active_count(&self) -> Result<i64, ApiError> {
        self.client.get("/api/memberships/stats/active-count").await
    }

    pub async fn check_user_has_active(&self, user_id: UserId) -> Result<bool, ApiError> {
        self.client
            .get(&format!("/api/memberships/check/{user_id}"))
            .await
    }

    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/api/memberships", data).await
    }

    pub async fn update(&self, id: MembershipId, data: &Value) -> Result<Value, ApiError> {
        self.client
            .put(&format!("/api/memberships/{id}"), data)
            .await
    }

    pub async fn delete(&self, id: MembershipId) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/memberships/{id}")).await
    }

    pub async fn update_status(&self, id: MembershipId, status: &str) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/memberships/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn renew(&self, id: MembershipId, new_end_date: &str) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/memberships/{id}/renew"),
                &[("newEndDate", new_end_date.to_string())],
            )
            .await
    }
}
