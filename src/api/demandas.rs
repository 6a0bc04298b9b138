use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Demanda, DemandaPayload};

impl ApiClient {
    pub async fn list_demandas(&self) -> Result<Vec<Demanda>, ApiError> {
        self.get_json("/demandas").await
    }

    pub async fn get_demanda(&self, id: i64) -> Result<Demanda, ApiError> {
        self.get_json(&format!("/demandas/{}", id)).await
    }

    pub async fn create_demanda(&self, payload: &DemandaPayload) -> Result<Demanda, ApiError> {
        self.post_json("/demandas", payload).await
    }

    pub async fn update_demanda(
        &self,
        id: i64,
        payload: &DemandaPayload,
    ) -> Result<Demanda, ApiError> {
        self.put_json(&format!("/demandas/{}", id), payload).await
    }

    pub async fn delete_demanda(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/demandas/{}", id)).await
    }
}
