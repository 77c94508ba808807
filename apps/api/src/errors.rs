use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Please upload a PDF or TXT file. ({0} is not supported)")]
    UnsupportedFileType(String),

    #[error("API key is missing. Please ensure API_KEY is configured.")]
    MissingCredential,

    #[error("Analysis request failed: {0}")]
    AnalysisRequest(String),

    #[error("Analysis response could not be parsed: {0}")]
    AnalysisParse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFileType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE_TYPE",
                self.to_string(),
            ),
            AppError::MissingCredential => {
                tracing::error!("Scan attempted without a configured API key");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_CREDENTIAL",
                    self.to_string(),
                )
            }
            // Analysis failures carry the upstream message verbatim so the
            // client can show it inline and let the user retry.
            AppError::AnalysisRequest(msg) => {
                tracing::error!("Analysis request failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_REQUEST_FAILED",
                    msg.clone(),
                )
            }
            AppError::AnalysisParse(msg) => {
                tracing::error!("Analysis parse failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_PARSE_FAILED",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
