use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AtualizaUsuario, LoginRequest, MeResponse, NovoUsuario, Usuario};

impl ApiClient {
    /// O corpo da resposta de login não é confiável para montar a sessão;
    /// apenas o status importa. O perfil completo vem de `me()` em seguida.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        self.post_status("/auth/login", request).await
    }

    pub async fn me(&self) -> Result<Usuario, ApiError> {
        let response: MeResponse = self.get_json("/auth/me").await?;
        Ok(response.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_status("/auth/logout", &serde_json::json!({})).await
    }

    pub async fn list_users(&self) -> Result<Vec<Usuario>, ApiError> {
        self.get_json("/auth/list-users").await
    }

    pub async fn register_user(&self, payload: &NovoUsuario) -> Result<Usuario, ApiError> {
        self.post_json("/auth/register", payload).await
    }

    pub async fn update_user(&self, payload: &AtualizaUsuario) -> Result<Usuario, ApiError> {
        self.post_json("/auth/update-user", payload).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/auth/delete-user/{}", id))
            .await
    }
}
