// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

// Erros internos da aplicação (repositórios, builders, hashing...).
// A classe que o cliente enxerga é decidida em `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    // Placeholder `:nome` sem valor no mapa de parâmetros (erro de programação)
    #[error("parâmetro sem valor na query: :{0}")]
    UnboundParameter(String),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("{0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound("no rows in result set".to_string()),
            sqlx::Error::Database(db_err) => {
                // Classe 23 = violação de integridade (FK, NOT NULL, UNIQUE...)
                // Classe 22 = dado inválido (uuid malformado, texto longo demais...)
                let is_caller_error = db_err
                    .code()
                    .map(|code| code.starts_with("23") || code.starts_with("22"))
                    .unwrap_or(false);
                if is_caller_error {
                    AppError::InvalidArgument(db_err.message().to_string())
                } else {
                    AppError::Internal(err.to_string())
                }
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

/// Classe de status exposta ao cliente, com a mesma semântica dos códigos gRPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    InvalidArgument,
    NotFound,
    Internal,
}

impl Code {
    pub fn http_status(self) -> StatusCode {
        match self {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub code: Code,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self { code: Code::InvalidArgument, message: message.into(), details: None }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { code: Code::NotFound, message: message.into(), details: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { code: Code::Internal, message: message.into(), details: None }
    }
}

impl AppError {
    pub fn to_api_error(&self) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    code: Code::InvalidArgument,
                    message: "one or more fields are invalid".to_string(),
                    details: Some(details),
                }
            }
            AppError::InvalidArgument(message) => ApiError::invalid_argument(message.clone()),
            AppError::NotFound(message) => ApiError::not_found(message.clone()),

            // Todo o resto vira INTERNAL. O detalhe fica só no log.
            e => {
                tracing::error!(error = %e, "Erro Interno do Servidor");
                ApiError::internal("internal error")
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        err.to_api_error()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self)).into_response()
    }
}
