//! Gothon web — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gothon_core::error::GameError;
use gothon_story::StoryError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story could not be loaded.
    #[error("story error: {0}")]
    Story(#[from] StoryError),

    /// The session store could not be opened.
    #[error("session store error: {0}")]
    Store(#[from] GameError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `GameError` that implements `IntoResponse`.
///
/// Invalid sessions never reach this type: they are answered with a
/// redirect by the handlers.
#[derive(Debug)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_code = match &self.0 {
            GameError::UnknownRoom(_) => "unknown_room",
            GameError::Storage(_) => "storage_error",
        };
        tracing::error!(error = %self.0, "request failed");

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
