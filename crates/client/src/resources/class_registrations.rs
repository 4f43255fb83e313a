//! `/api/class-registrations` — who is signed up for which class.

use serde_json::Value;

use gymdesk_core::{ClassRegistrationId, GymClassId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct ClassRegistrationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ClassRegistrationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/class-registrations").await
    }

    pub async fn get(&self, id: ClassRegistrationId) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/class-registrations/{id}"))
            .await
    }

    pub async fn by_member(&self, member_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/class-registrations/member/{member_id}"))
            .await
    }

    pub async fn by_class(&self, class_id: GymClassId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/class-registrations/class/{class_id}"))
            .await
    }

    pub async fn by_member_and_status(
        &self,
        member_id: UserId,
        status: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!(
                "/api/class-registrations/member/{member_id}/status/{status}"
            ))
            .await
    }

    pub async fn by_class_and_status(
        &self,
        class_id: GymClassId,
        status: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!(
                "/api/class-registrations/class/{class_id}/status/{status}"
            ))
            .await
    }

    pub async fn upcoming(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/class-registrations/upcoming").await
    }

    pub async fn upcoming_by_member(&self, member_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!(
                "/api/class-registrations/member/{member_id}/upcoming"
            ))
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
                &format!("/api/class-registrations/member/{member_id}/date-range"),
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn by_class_and_date_range(
        &self,
        class_id: GymClassId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                &format!("/api/class-registrations/class/{class_id}/date-range"),
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn count_by_class(&self, class_id: GymClassId) -> Result<i64, ApiError> {
        self.client
            .get(&format!("/api/class-registrations/class/{class_id}/count"))
            .await
    }

    pub async fn attended_count_by_member(&self, member_id: UserId) -> Result<i64, ApiError> {
        self.client
            .get(&format!(
                "/api/class-registrations/member/{member_id}/attended-count"
            ))
            .await
    }

    pub async fn check_member_registered(
        &self,
        member_id: UserId,
        class_id: GymClassId,
    ) -> Result<bool, ApiError> {
        self.client
            .get(&format!(
                "/api/class-registrations/check/{member_id}/{class_id}"
            ))
            .await
    }

    /// Register a member for a class. Ids travel as query parameters, the
    /// way the backend expects them.
    pub async fn register(
        &self,
        member_id: UserId,
        class_id: GymClassId,
    ) -> Result<Value, ApiError> {
        self.client
            .post_query(
                "/api/class-registrations/register",
                &[
                    ("memberId", member_id.to_string()),
                    ("classId", class_id.to_string()),
                ],
            )
            .await
    }

    pub async fn update_status(
        &self,
        id: ClassRegistrationId,
        status: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/class-registrations/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn cancel(&self, id: ClassRegistrationId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/class-registrations/{id}/cancel"))
            .await
    }

    pub async fn delete(&self, id: ClassRegistrationId) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/class-registrations/{id}"))
            .await
    }

    pub async fn mark_attendance(&self, id: ClassRegistrationId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/class-registrations/{id}/attendance"))
            .await
    }

    pub async fn mark_no_show(&self, id: ClassRegistrationId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/class-registrations/{id}/no-show"))
            .await
    }
}
