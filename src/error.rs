//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddr(String),
    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),
    #[error("invalid database url: {0}")]
    InvalidDatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Error payload. `detail` is the key HTTP clients of this API read.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

impl AppError {
    pub fn item_not_found() -> Self {
        AppError::NotFound("Item not found".into())
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let detail = if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            detail,
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
