//! `/api/payments` — payment records, stats, and revenue views.

use serde_json::Value;

use gymdesk_core::{PaymentId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct PaymentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/payments").await
    }

    pub async fn get(&self, id: PaymentId) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/payments/{id}")).await
    }

    pub async fn by_user(&self, user_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/payments/user/{user_id}"))
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/payments/status/{status}"))
            .await
    }

    pub async fn by_type(&self, payment_type: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/payments/type/{payment_type}"))
            .await
    }

    pub async fn by_method(&self, method: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/payments/method/{method}"))
            .await
    }

    pub async fn completed_by_user(&self, user_id: UserId) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/payments/user/{user_id}/completed"))
            .await
    }

    pub async fn by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/payments/date-range",
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn by_user_and_date_range(
        &self,
        user_id: UserId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                &format!("/api/payments/user/{user_id}/date-range"),
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn total_by_user(&self, user_id: UserId) -> Result<f64, ApiError> {
        self.client
            .get(&format!("/api/payments/user/{user_id}/total"))
            .await
    }

    pub async fn revenue_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<f64, ApiError> {
        self.client
            .get_query(
                "/api/payments/revenue/date-range",
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn completed_count(&self) -> Result<i64, ApiError> {
        self.client.get("/api/payments/stats/completed-count").await
    }

    pub async fn pending_count(&self) -> Result<i64, ApiError> {
        self.client.get("/api/payments/stats/pending-count").await
    }

    pub async fn overdue(&self, due_date: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query("/api/payments/overdue", &[("dueDate", due_date.to_string())])
            .await
    }

    pub async fn high_value(&self, min_amount: f64) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/payments/high-value",
                &[("minAmount", min_amount.to_string())],
            )
            .await
    }

    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/api/payments", data).await
    }

    pub async fn update(&self, id: PaymentId, data: &Value) -> Result<Value, ApiError> {
        self.client.put(&format!("/api/payments/{id}"), data).await
    }

    pub async fn delete(&self, id: PaymentId) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/payments/{id}")).await
    }

    pub async fn update_status(&self, id: PaymentId, status: &str) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/payments/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn process(&self, id: PaymentId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/payments/{id}/process"))
            .await
    }

    pub async fn refund(&self, id: PaymentId, notes: &str) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/payments/{id}/refund"),
                &[("notes", notes.to_string())],
            )
            .await
    }

    pub async fn cancel(&self, id: PaymentId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/payments/{id}/cancel"))
            .await
    }

    pub async fn create_membership_payment(
        &self,
        user_id: UserId,
        amount: f64,
        method: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post_query(
                "/api/payments/membership",
                &[
                    ("userId", user_id.to_string()),
                    ("amount", amount.to_string()),
                    ("method", method.to_string()),
                ],
            )
            .await
    }

    pub async fn create_class_payment(
        &self,
        user_id: UserId,
        amount: f64,
        method: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post_query(
                "/api/payments/class",
                &[
                    ("userId", user_id.to_string()),
                    ("amount", amount.to_string()),
                    ("method", method.to_string()),
                ],
            )
            .await
    }

    pub async fn create_training_session_payment(
        &self,
        user_id: UserId,
        amount: f64,
        method: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post_query(
                "/api/payments/training-session",
                &[
                    ("userId", user_id.to_string()),
                    ("amount", amount.to_string()),
                    ("method", method.to_string()),
                ],
            )
            .await
    }
}
