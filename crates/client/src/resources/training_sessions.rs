//! `/api/training-sessions` — one-on-one sessions between trainer and member.

use serde_json::Value;

use gymdesk_core::{TrainingSessionId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct TrainingSessionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrainingSessionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/training-sessions").await
    }

    pub async fn get(&self, id: TrainingSessionId) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/training-sessions/{id}"))
            .await
    }

    pub async fn by_trainer(&self, trainer_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/training-sessions/trainer/{trainer_id}"))
            .await
    }

    pub async fn by_member(&self, member_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/training-sessions/member/{member_id}"))
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/training-sessions/status/{status}"))
            .await
    }

    pub async fn by_type(&self, session_type: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/training-sessions/type/{session_type}"))
            .await
    }

    pub async fn upcoming(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/training-sessions/upcoming").await
    }

    pub async fn upcoming_by_trainer(&self, trainer_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!(
                "/api/training-sessions/trainer/{trainer_id}/upcoming"
            ))
            .await
    }

    pub async fn upcoming_by_member(&self, member_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!(
                "/api/training-sessions/member/{member_id}/upcoming"
            ))
            .await
    }

    pub async fn by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/training-sessions/date-range",
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn by_trainer_and_date_range(
        &self,
        trainer_id: UserId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                &format!("/api/training-sessions/trainer/{trainer_id}/date-range"),
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn by_member_and_date_range(
        &self,
        member_id: UserId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                &format!("/api/training-sessions/member/{member_id}/date-range"),
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn completed_count_by_trainer(&self, trainer_id: UserId) -> Result<i64, ApiError> {
        self.client
            .get(&format!(
                "/api/training-sessions/stats/trainer/{trainer_id}/completed"
            ))
            .await
    }

    pub async fn completed_count_by_member(&self, member_id: UserId) -> Result<i64, ApiError> {
        self.client
            .get(&format!(
                "/api/training-sessions/stats/member/{member_id}/completed"
            ))
            .await
    }

    /// Member-facing booking endpoint (distinct from staff `create`).
    pub async fn book(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/api/training-sessions/book", data).await
    }

    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/api/training-sessions", data).await
    }

    pub async fn update(&self, id: TrainingSessionId, data: &Value) -> Result<Value, ApiError> {
        self.client
            .put(&format!("/api/training-sessions/{id}"), data)
            .await
    }

    pub async fn delete(&self, id: TrainingSessionId) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/training-sessions/{id}"))
            .await
    }

    pub async fn update_status(
        &self,
        id: TrainingSessionId,
        status: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/training-sessions/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn reschedule(
        &self,
        id: TrainingSessionId,
        new_scheduled_date: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/training-sessions/{id}/reschedule"),
                &[("newScheduledDate", new_scheduled_date.to_string())],
            )
            .await
    }
}
