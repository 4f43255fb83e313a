//! `/api/equipment` — equipment inventory and maintenance.

use serde_json::Value;

use gymdesk_core::EquipmentId;

use crate::error::ApiError;
use crate::http::ApiClient;

pub struct EquipmentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EquipmentApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/equipment").await
    }

    pub async fn get(&self, id: EquipmentId) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/equipment/{id}")).await
    }

    pub async fn by_type(&self, equipment_type: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/equipment/type/{equipment_type}"))
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/equipment/status/{status}"))
            .await
    }

    pub async fn by_location(&self, location: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get(&format!("/api/equipment/location/{location}"))
            .await
    }

    pub async fn needing_maintenance(&self) -> Result<Vec<Value>, ApiError> {
        self.client.get("/api/equipment/maintenance/needing").await
    }

    pub async fn warranty_expiring(&self, expiry_date: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/equipment/warranty/expiring",
                &[("expiryDate", expiry_date.to_string())],
            )
            .await
    }

    pub async fn available_count(&self) -> Result<i64, ApiError> {
        self.client.get("/api/equipment/stats/available-count").await
    }

    pub async fn maintenance_count(&self) -> Result<i64, ApiError> {
        self.client
            .get("/api/equipment/stats/maintenance-count")
            .await
    }

    pub async fn search(&self, search_term: &str) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/equipment/search",
                &[("searchTerm", search_term.to_string())],
            )
            .await
    }

    pub async fn purchased_between(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.client
            .get_query(
                "/api/equipment/purchased",
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/api/equipment", data).await
    }

    pub async fn update(&self, id: EquipmentId, data: &Value) -> Result<Value, ApiError> {
        self.client.put(&format!("/api/equipment/{id}"), data).await
    }

    pub async fn delete(&self, id: EquipmentId) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/equipment/{id}")).await
    }

    pub async fn update_status(&self, id: EquipmentId, status: &str) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/equipment/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn schedule_maintenance(
        &self,
        id: EquipmentId,
        next_maintenance_date: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/equipment/{id}/maintenance/schedule"),
                &[("nextMaintenanceDate", next_maintenance_date.to_string())],
            )
            .await
    }

    pub async fn complete_maintenance(&self, id: EquipmentId) -> Result<Value, ApiError> {
        self.client
            .put_empty(&format!("/api/equipment/{id}/maintenance/complete"))
            .await
    }

    pub async fn set_warranty_expiry(
        &self,
        id: EquipmentId,
        warranty_expiry: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .put_query(
                &format!("/api/equipment/{id}/warranty"),
                &[("warrantyExpiry", warranty_expiry.to_string())],
            )
            .await
    }
}
