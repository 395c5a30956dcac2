use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::errors::SinkError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status();
        let msg = match self {
            AppError::BadRequest(s)
            | AppError::PayloadTooLarge(s)
            | AppError::Internal(s) => s,
        };
        (code, Json(ErrBody { error: msg })).into_response()
    }
}

// Framing problems are the client's fault; everything past framing is a 500
impl From<SinkError> for AppError {
    fn from(err: SinkError) -> Self {
        match err {
            SinkError::Framing { reason } => AppError::BadRequest(reason),
            SinkError::Parse { reason } => AppError::Internal(reason),
            SinkError::Json { source } => AppError::Internal(source.to_string()),
            SinkError::Write { operation, source } => {
                AppError::Internal(format!("{operation} failed: {source}"))
            }
            SinkError::MutexPoisoned { resource } => {
                AppError::Internal(format!("Mutex for {resource} poisoned"))
            }
            SinkError::Config { message } => AppError::Internal(message),
        }
    }
}
