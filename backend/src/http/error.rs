//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::calendar::CalendarError;

pub const UNAUTHORIZED_MESSAGE: &str = "Não autorizado. Faça login para acessar esta API.";
pub const UPSTREAM_MESSAGE: &str = "Erro ao buscar eventos do Google Calendar";
pub const INTERNAL_MESSAGE: &str = "Erro interno do servidor";

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or unusable credentials
    Unauthorized,
    /// Invalid query parameters
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Calendar provider error
    Calendar(CalendarError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNAUTHORIZED", UNAUTHORIZED_MESSAGE),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Calendar(e) => match e.upstream_status() {
                Some(code) => {
                    warn!(status = code, "Passing calendar provider failure through");
                    // Upstream answered with something we cannot mirror (e.g. 1xx/3xx)
                    let status = StatusCode::from_u16(code)
                        .ok()
                        .filter(|s| s.is_client_error() || s.is_server_error())
                        .unwrap_or(StatusCode::BAD_GATEWAY);
                    (status, ApiError::new("UPSTREAM_ERROR", UPSTREAM_MESSAGE))
                }
                None => {
                    error!(error = %e, "Calendar processing failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("INTERNAL_ERROR", INTERNAL_MESSAGE),
                    )
                }
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Parâmetros inválidos: {}", rejection.body_text()))
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        AppError::Calendar(err)
    }
}
