use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Client input errors raised while binding query parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("parameter `{name}` must be an integer, got `{value}`")]
    InvalidParameter { name: &'static str, value: String },
    #[error("{0}")]
    InvalidQuery(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_)
            | AppError::InvalidParameter { .. }
            | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        debug!(error = %self, "rejecting request");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
