//! CRUD dos cadastros de referência do catálogo. Todos seguem o mesmo
//! contrato REST (`GET /recurso`, `POST /recurso`, `PUT /recurso/:id`,
//! `DELETE /recurso/:id`).

use crate::api::client::ApiClient;
use crate::api::types::{
    Alinhamento, ApiError, Categoria, Desenvolvedor, ItemCatalogoPayload, Linguagem,
    PessoaPayload, Prioridade, Responsavel, Status, Time, Tipo,
};

impl ApiClient {
    pub async fn list_categorias(&self) -> Result<Vec<Categoria>, ApiError> {
        self.get_json("/categorias").await
    }

    pub async fn create_categoria(
        &self,
        payload: &ItemCatalogoPayload,
    ) -> Result<Categoria, ApiError> {
        self.post_json("/categorias", payload).await
    }

    pub async fn update_categoria(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Categoria, ApiError> {
        self.put_json(&format!("/categorias/{}", id), payload).await
    }

    pub async fn delete_categoria(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/categorias/{}", id)).await
    }

    pub async fn list_linguagens(&self) -> Result<Vec<Linguagem>, ApiError> {
        self.get_json("/linguagens").await
    }

    pub async fn create_linguagem(
        &self,
        payload: &ItemCatalogoPayload,
    ) -> Result<Linguagem, ApiError> {
        self.post_json("/linguagens", payload).await
    }

    pub async fn update_linguagem(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Linguagem, ApiError> {
        self.put_json(&format!("/linguagens/{}", id), payload).await
    }

    pub async fn delete_linguagem(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/linguagens/{}", id)).await
    }

    pub async fn list_prioridades(&self) -> Result<Vec<Prioridade>, ApiError> {
        self.get_json("/prioridades").await
    }

    pub async fn create_prioridade(
        &self,
        payload: &ItemCatalogoPayload,
    ) -> Result<Prioridade, ApiError> {
        self.post_json("/prioridades", payload).await
    }

    pub async fn update_prioridade(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Prioridade, ApiError> {
        self.put_json(&format!("/prioridades/{}", id), payload).await
    }

    pub async fn delete_prioridade(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/prioridades/{}", id)).await
    }

    pub async fn list_status(&self) -> Result<Vec<Status>, ApiError> {
        self.get_json("/status").await
    }

    pub async fn create_status(&self, payload: &ItemCatalogoPayload) -> Result<Status, ApiError> {
        self.post_json("/status", payload).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Status, ApiError> {
        self.put_json(&format!("/status/{}", id), payload).await
    }

    pub async fn delete_status(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/status/{}", id)).await
    }

    pub async fn list_times(&self) -> Result<Vec<Time>, ApiError> {
        self.get_json("/times").await
    }

    pub async fn create_time(&self, payload: &ItemCatalogoPayload) -> Result<Time, ApiError> {
        self.post_json("/times", payload).await
    }

    pub async fn update_time(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Time, ApiError> {
        self.put_json(&format!("/times/{}", id), payload).await
    }

    pub async fn delete_time(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/times/{}", id)).await
    }

    pub async fn list_tipos(&self) -> Result<Vec<Tipo>, ApiError> {
        self.get_json("/tipos").await
    }

    pub async fn create_tipo(&self, payload: &ItemCatalogoPayload) -> Result<Tipo, ApiError> {
        self.post_json("/tipos", payload).await
    }

    pub async fn update_tipo(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Tipo, ApiError> {
        self.put_json(&format!("/tipos/{}", id), payload).await
    }

    pub async fn delete_tipo(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/tipos/{}", id)).await
    }

    pub async fn list_alinhamentos(&self) -> Result<Vec<Alinhamento>, ApiError> {
        self.get_json("/alinhamentos").await
    }

    pub async fn create_alinhamento(
        &self,
        payload: &ItemCatalogoPayload,
    ) -> Result<Alinhamento, ApiError> {
        self.post_json("/alinhamentos", payload).await
    }

    pub async fn update_alinhamento(
        &self,
        id: i64,
        payload: &ItemCatalogoPayload,
    ) -> Result<Alinhamento, ApiError> {
        self.put_json(&format!("/alinhamentos/{}", id), payload)
            .await
    }

    pub async fn delete_alinhamento(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/alinhamentos/{}", id)).await
    }

    pub async fn list_desenvolvedores(&self) -> Result<Vec<Desenvolvedor>, ApiError> {
        self.get_json("/desenvolvedores").await
    }

    pub async fn create_desenvolvedor(
        &self,
        payload: &PessoaPayload,
    ) -> Result<Desenvolvedor, ApiError> {
        self.post_json("/desenvolvedores", payload).await
    }

    pub async fn update_desenvolvedor(
        &self,
        id: i64,
        payload: &PessoaPayload,
    ) -> Result<Desenvolvedor, ApiError> {
        self.put_json(&format!("/desenvolvedores/{}", id), payload)
            .await
    }

    pub async fn delete_desenvolvedor(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/desenvolvedores/{}", id))
            .await
    }

    pub async fn list_responsaveis(&self) -> Result<Vec<Responsavel>, ApiError> {
        self.get_json("/responsaveis").await
    }

    pub async fn create_responsavel(
        &self,
        payload: &PessoaPayload,
    ) -> Result<Responsavel, ApiError> {
        self.post_json("/responsaveis", payload).await
    }

    pub async fn update_responsavel(
        &self,
        id: i64,
        payload: &PessoaPayload,
    ) -> Result<Responsavel, ApiError> {
        self.put_json(&format!("/responsaveis/{}", id), payload)
            .await
    }

    pub async fn delete_responsavel(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/responsaveis/{}", id)).await
    }
}
