use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Solucao, SolucaoPayload};

impl ApiClient {
    pub async fn list_solucoes(&self) -> Result<Vec<Solucao>, ApiError> {
        self.get_json("/solucoes").await
    }

    pub async fn get_solucao(&self, id: i64) -> Result<Solucao, ApiError> {
        self.get_json(&format!("/solucoes/{}", id)).await
    }

    pub async fn create_solucao(&self, payload: &SolucaoPayload) -> Result<Solucao, ApiError> {
        self.post_json("/solucoes", payload).await
    }

    pub async fn update_solucao(
        &self,
        id: i64,
        payload: &SolucaoPayload,
    ) -> Result<Solucao, ApiError> {
        self.put_json(&format!("/solucoes/{}", id), payload).await
    }

    pub async fn delete_solucao(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/solucoes/{}", id)).await
    }
}
