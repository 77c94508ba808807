//! Axum route handlers for the Scan API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::analysis::{analyze_match, validate_scan_inputs, AnalysisResult};
use crate::errors::AppError;
use crate::normalize::SourceDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub resume: Option<SourceDocument>,
    pub jd: Option<SourceDocument>,
}

/// POST /api/v1/scan
///
/// Runs one analysis over a resume/JD pair of normalized documents.
/// Preconditions are checked here so nothing invalid reaches the backend.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let (resume, jd) = validate_scan_inputs(request.resume.as_ref(), request.jd.as_ref())?;

    let result = analyze_match(state.backend.as_ref(), resume, jd).await?;

    info!(score = result.score, "scan complete");

    Ok(Json(result))
}

/// POST /api/v1/documents
///
/// Normalizes one uploaded input into a `SourceDocument`. Accepts either a
/// `file` part (PDF/TXT, validated and base64-encoded) or a `text` part;
/// every upload path converges on the same normalization.
pub async fn handle_normalize_upload(
    mut multipart: Multipart,
) -> Result<Json<SourceDocument>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::Validation("Uploaded file has no name.".to_string()))?;
                let content_type = field.content_type().map(str::to_string);

                let data: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

                let document =
                    SourceDocument::file(&file_name, content_type.as_deref(), &data)?;
                info!(file = %file_name, bytes = data.len(), "normalized uploaded file");
                return Ok(Json(document));
            }
            Some("text") => {
                let content = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                return Ok(Json(SourceDocument::text(content)));
            }
            _ => continue,
        }
    }

    Err(AppError::Validation(
        "Upload must contain a 'file' or 'text' field.".to_string(),
    ))
}
