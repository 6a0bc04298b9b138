use serde::de::DeserializeOwned;

use crate::api::client::ApiClient;
use crate::api::types::{
    Alinhamento, ApiError, Categoria, Demanda, Linguagem, Prioridade, Proprietario,
    ProprietarioPayload, Responsavel, Solucao, Status, Time, Tipo,
};

impl ApiClient {
    /// O backend devolve somente os proprietários visíveis para a sessão
    /// corrente; a lista pode ser vazia.
    pub async fn list_proprietarios(&self) -> Result<Vec<Proprietario>, ApiError> {
        self.get_json("/proprietarios").await
    }

    pub async fn get_proprietario(&self, id: i64) -> Result<Proprietario, ApiError> {
        self.get_json(&format!("/proprietarios/{}", id)).await
    }

    pub async fn create_proprietario(
        &self,
        payload: &ProprietarioPayload,
    ) -> Result<Proprietario, ApiError> {
        self.post_json("/proprietarios", payload).await
    }

    pub async fn update_proprietario(
        &self,
        id: i64,
        payload: &ProprietarioPayload,
    ) -> Result<Proprietario, ApiError> {
        self.put_json(&format!("/proprietarios/{}", id), payload)
            .await
    }

    pub async fn delete_proprietario(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/proprietarios/{}", id)).await
    }

    async fn nested<T: DeserializeOwned>(
        &self,
        id: i64,
        recurso: &str,
    ) -> Result<Vec<T>, ApiError> {
        self.get_json(&format!("/proprietarios/{}/{}", id, recurso))
            .await
    }

    pub async fn times_do_proprietario(&self, id: i64) -> Result<Vec<Time>, ApiError> {
        self.nested(id, "times").await
    }

    pub async fn linguagens_do_proprietario(&self, id: i64) -> Result<Vec<Linguagem>, ApiError> {
        self.nested(id, "linguagens").await
    }

    pub async fn responsaveis_do_proprietario(
        &self,
        id: i64,
    ) -> Result<Vec<Responsavel>, ApiError> {
        self.nested(id, "responsaveis").await
    }

    pub async fn tipos_do_proprietario(&self, id: i64) -> Result<Vec<Tipo>, ApiError> {
        self.nested(id, "tipos").await
    }

    pub async fn alinhamentos_do_proprietario(
        &self,
        id: i64,
    ) -> Result<Vec<Alinhamento>, ApiError> {
        self.nested(id, "alinhamentos").await
    }

    pub async fn prioridades_do_proprietario(&self, id: i64) -> Result<Vec<Prioridade>, ApiError> {
        self.nested(id, "prioridades").await
    }

    pub async fn status_do_proprietario(&self, id: i64) -> Result<Vec<Status>, ApiError> {
        self.nested(id, "status").await
    }

    pub async fn categorias_do_proprietario(&self, id: i64) -> Result<Vec<Categoria>, ApiError> {
        self.nested(id, "categorias").await
    }

    pub async fn demandas_do_proprietario(&self, id: i64) -> Result<Vec<Demanda>, ApiError> {
        self.nested(id, "demandas").await
    }

    pub async fn solucoes_do_proprietario(&self, id: i64) -> Result<Vec<Solucao>, ApiError> {
        self.nested(id, "solucoes").await
    }
}
