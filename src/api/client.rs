use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::types::{ApiError, ErrorBody};
use crate::config;

/// Cliente HTTP único do console. Sempre envia `Accept: application/json`,
/// inclui cookies nas chamadas (credenciais de sessão) e, ao receber 401 fora
/// da tela de login, força navegação para `/login`. Não há retry nem fila.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if let Ok(pathname) = location.pathname() {
                    if pathname == crate::router::LOGIN_PATH {
                        return;
                    }
                }
                let _ = location.set_href(crate::router::LOGIN_PATH);
            }
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn dispatch(&self, builder: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        builder.send().await.map_err(|err| {
            log::error!("Falha de rede em {}: {}", path, err);
            ApiError::Network
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let response = self.dispatch(self.request(Method::GET, &url), path).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let response = self
            .dispatch(self.request(Method::POST, &url).json(body), path)
            .await?;
        Self::decode(response).await
    }

    /// POST cujo corpo de resposta não interessa; só o status é avaliado.
    pub(crate) async fn post_status<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let response = self
            .dispatch(self.request(Method::POST, &url).json(body), path)
            .await?;
        Self::expect_success(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let response = self
            .dispatch(self.request(Method::PUT, &url).json(body), path)
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_resource(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let response = self
            .dispatch(self.request(Method::DELETE, &url), path)
            .await?;
        Self::expect_success(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response.json().await.map_err(|err| {
                ApiError::Unexpected(format!("Resposta inesperada do servidor: {}", err))
            })
        } else {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            Err(Self::error_for(status, body))
        }
    }

    async fn expect_success(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            Err(Self::error_for(status, body))
        }
    }

    fn error_for(status: StatusCode, body: ErrorBody) -> ApiError {
        let message = body.message();
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden(message.unwrap_or_else(|| {
                "Você não tem permissão para executar esta ação.".to_string()
            })),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(
                message.unwrap_or_else(|| "Dados inválidos. Revise o formulário.".to_string()),
            ),
            StatusCode::CONFLICT => ApiError::Conflict(
                message.unwrap_or_else(|| "Registro duplicado.".to_string()),
            ),
            _ => ApiError::Unexpected(
                message.unwrap_or_else(|| format!("Falha inesperada ({})", status.as_u16())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn unauthorized_maps_without_reading_the_body() {
        let error = ApiClient::error_for(StatusCode::UNAUTHORIZED, body(r#"{"message":"x"}"#));
        assert_eq!(error, ApiError::Unauthorized);
    }

    #[test]
    fn validation_prefers_server_message() {
        let error = ApiClient::error_for(
            StatusCode::BAD_REQUEST,
            body(r#"{"message":"Nome é obrigatório"}"#),
        );
        assert_eq!(error, ApiError::Validation("Nome é obrigatório".into()));
    }

    #[test]
    fn validation_falls_back_to_generic_message() {
        let error = ApiClient::error_for(StatusCode::UNPROCESSABLE_ENTITY, ErrorBody::default());
        assert_eq!(
            error,
            ApiError::Validation("Dados inválidos. Revise o formulário.".into())
        );
    }

    #[test]
    fn conflict_and_forbidden_carry_human_readable_text() {
        assert_eq!(
            ApiClient::error_for(StatusCode::CONFLICT, body(r#"{"error":"E-mail já em uso"}"#)),
            ApiError::Conflict("E-mail já em uso".into())
        );
        assert_eq!(
            ApiClient::error_for(StatusCode::FORBIDDEN, ErrorBody::default()),
            ApiError::Forbidden("Você não tem permissão para executar esta ação.".into())
        );
    }

    #[test]
    fn other_statuses_map_to_unexpected_with_status_code() {
        let error = ApiClient::error_for(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::default());
        assert_eq!(error, ApiError::Unexpected("Falha inesperada (500)".into()));
    }
}
