use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status from data source: {status}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalServerError,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Course not found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Transport(e) => {
                error!("data source transport error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to reach course data source".to_string(),
                )
            }
            AppError::UpstreamStatus { status, body } => {
                error!("data source returned {}: {}", status, body);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Course data source returned {}", status),
                )
            }
            AppError::Decode(e) => {
                error!("data source decode error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Malformed response from course data source".to_string(),
                )
            }
            AppError::Graphql(msg) => {
                error!("data source graphql error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Course data source rejected the query".to_string(),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
