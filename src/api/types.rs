use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Perfil fixo de administrador no backend.
pub const PERFIL_ADMIN: i64 = 1;
/// Perfil fixo de gestor no backend.
pub const PERFIL_GESTOR: i64 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role_id: i64,
}

impl Usuario {
    pub fn is_admin(&self) -> bool {
        self.role_id == PERFIL_ADMIN
    }

    pub fn is_gestor(&self) -> bool {
        self.role_id == PERFIL_GESTOR
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: Usuario,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoUsuario {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizaUsuario {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Unidade organizacional dona dos dados (tenant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proprietario {
    pub id: i64,
    pub nome: String,
    pub sigla: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProprietarioPayload {
    pub nome: String,
    pub sigla: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linguagem {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prioridade {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Time {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tipo {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alinhamento {
    pub id: i64,
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Desenvolvedor {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsavel {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    pub proprietario_id: i64,
}

/// Payload compartilhado pelos cadastros de referência (categorias,
/// linguagens, prioridades, status, times, tipos, alinhamentos).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCatalogoPayload {
    pub nome: String,
    pub proprietario_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PessoaPayload {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub proprietario_id: i64,
}

/// Solicitação de trabalho registrada para um proprietário.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demanda {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub demandante: Option<String>,
    pub proprietario_id: i64,
    #[serde(default)]
    pub prioridade_id: Option<i64>,
    #[serde(default)]
    pub alinhamento_id: Option<i64>,
    #[serde(default)]
    pub status_id: Option<i64>,
    #[serde(default)]
    pub responsavel_id: Option<i64>,
    #[serde(default)]
    pub data_status: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandaPayload {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demandante: Option<String>,
    pub proprietario_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioridade_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alinhamento_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_status: Option<NaiveDate>,
}

/// Solução entregue, normalmente originada de uma demanda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solucao {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub sigla: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub versao: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repositorio: Option<String>,
    pub proprietario_id: i64,
    #[serde(default)]
    pub categoria_id: Option<i64>,
    #[serde(default)]
    pub linguagem_id: Option<i64>,
    #[serde(default)]
    pub desenvolvedor_id: Option<i64>,
    #[serde(default)]
    pub time_id: Option<i64>,
    #[serde(default)]
    pub demanda_id: Option<i64>,
    #[serde(default)]
    pub status_id: Option<i64>,
    #[serde(default)]
    pub data_status: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolucaoPayload {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositorio: Option<String>,
    pub proprietario_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linguagem_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desenvolvedor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demanda_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_status: Option<NaiveDate>,
}

/// Taxonomia de falhas vindas do backend. Toda função que fala com a API
/// devolve `Result<T, ApiError>`; nenhum valor "error-shaped" escapa do
/// cliente HTTP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Não foi possível conectar ao servidor.")]
    Network,
    #[error("{0}")]
    Unexpected(String),
}

/// Corpo de erro tolerante aos formatos que o backend emite:
/// `{"message": "..."}`, `{"error": "..."}` e `{"error": true, "message": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        if let Some(message) = &self.message {
            if !message.is_empty() {
                return Some(message.clone());
            }
        }
        match &self.error {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}
