//! `/api/gym-classes` — group classes, schedules, and enrollment counters.

use serde_json::Value;

use gymdesk_core::{GymClassId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct GymClassesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GymClassesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/gym-classes").await
    }

    pub async fn get(&self, id: GymClassId) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/gym-classes/{id}")).await
    }

    pub async fn by_type(&self, class_type: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/gym-classes/type/{class_type}"))
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/gym-classes/status/{status}"))
            .await
    }

    pub async fn by_trainer(&self, trainer_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/gym-classes/trainer/{trainer_id}"))
            .await
    }

    pub async fn by_location(&self, location: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/gym-classes/location/{location}"))
            .await
    }

    /// Classes with open spots.
    pub async fn available(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/gym-classes/available").await
    }

    /// Classes at capacity.
    pub async fn full(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/gym-classes/full").await
    }

    pub async fn active_by_trainer(&self, trainer_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/gym-classes/trainer/{trainer_id}/active"))
            .await
    }

    pub async fn active_by_type(&self, class_type: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/gym-classes/type/{class_type}/active"))
            .await
    }

    pub async fn by_time_range(
        &self,
        start_time: &str,
        end_time: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/gym-classes/time-range",
                &[
                    ("startTime", start_time.to_string()),
                    ("endTime", end_time.to_string()),
                ],
            )
            .await
    }

    pub async fn by_day(&self, day: &str) -> Result<Vec<Value>, ApiError> {
        self.client.get(&format!("/api/gym-classes/day/{day}")).await
    }

    pub async fn active_count(&self) -> Result<i64, ApiError> {
        self.client.get("/api/gym-classes/stats/active-count").await
    }

    pub async fn search(&self, search_term: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/gym-classes/search",
                &[("searchTerm", search_term.to_string())],
            )
            .await
    }

    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/api/gym-classes", data).await
    }

    pub async fn update(&self, id: GymClassId, data: &Value) -> Result<Value, ApiError> {
        self.client
            .put(&format!("/api/gym-classes/{id}"), data)
            .await
    }

    pub async fn delete(&self, id: GymClassId) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/gym-classes/{id}")).await
    }

    pub async fn update_status(&self, id: GymClassId, status: &str) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/gym-classes/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn update_enrollment(
        &self,
        id: GymClassId,
        current_enrollment: i64,
    ) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/gym-classes/{id}/enrollment"),
                &[("currentEnrollment", current_enrollment.to_string())],
            )
            .await
    }

    pub async fn increment_enrollment(&self, id: GymClassId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/gym-classes/{id}/enrollment/increment"))
            .await
    }

    pub async fn decrement_enrollment(&self, id: GymClassId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/gym-classes/{id}/enrollment/decrement"))
            .await
    }
}
