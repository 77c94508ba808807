//! Match Analyzer — builds the single structured request from two normalized
//! documents, issues one backend call, and parses the feedback payload.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::config::resolve_api_key;
use crate::errors::AppError;
use crate::gemini::{
    Content, GenerateContentRequest, GenerationConfig, GenerativeBackend, InlineData, Part,
};
use crate::normalize::SourceDocument;
use self::prompts::{
    response_schema, ANALYSIS_INSTRUCTION, JD_END_MARKER, JD_START_MARKER, RESUME_END_MARKER,
    RESUME_START_MARKER,
};

/// The feedback object returned per scan. Values are passed through exactly
/// as the service produced them — no clamping, rounding, or length checks.
///
/// All fields default so that an empty service payload deserializes to the
/// degenerate result instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub score: i64,
    pub missing_keywords: Vec<String>,
    pub feedback: String,
    pub tips: Vec<String>,
}

/// Caller-side preconditions for a scan: both documents present, text
/// variants non-empty after trimming. Violations never reach the backend.
/// Returns the validated pair so callers need no re-checking.
pub fn validate_scan_inputs<'a>(
    resume: Option<&'a SourceDocument>,
    jd: Option<&'a SourceDocument>,
) -> Result<(&'a SourceDocument, &'a SourceDocument), AppError> {
    let (resume, jd) = match (resume, jd) {
        (Some(resume), Some(jd)) => (resume, jd),
        _ => {
            return Err(AppError::Validation(
                "Please provide both a Resume and a Job Description.".to_string(),
            ))
        }
    };

    if !resume.is_ready() || !jd.is_ready() {
        return Err(AppError::Validation(
            "Text inputs cannot be empty.".to_string(),
        ));
    }

    Ok((resume, jd))
}

/// Builds the request parts in their fixed, significant order:
/// instruction, resume markers/body, JD markers/body.
pub fn build_scan_request(resume: &SourceDocument, jd: &SourceDocument) -> GenerateContentRequest {
    let mut parts = vec![Part::Text(ANALYSIS_INSTRUCTION.to_string())];

    parts.push(Part::Text(RESUME_START_MARKER.to_string()));
    parts.push(document_part(resume));
    parts.push(Part::Text(RESUME_END_MARKER.to_string()));

    parts.push(Part::Text(JD_START_MARKER.to_string()));
    parts.push(document_part(jd));
    parts.push(Part::Text(JD_END_MARKER.to_string()));

    GenerateContentRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    }
}

fn document_part(document: &SourceDocument) -> Part {
    match document {
        SourceDocument::Text { content } => Part::Text(content.clone()),
        SourceDocument::File {
            content, mime_type, ..
        } => Part::InlineData(InlineData {
            mime_type: mime_type.clone(),
            data: content.clone(),
        }),
    }
}

/// Analyzes a resume against a job description with a single backend call.
///
/// The credential is resolved from the environment at call time; absence is a
/// `MissingCredential` failure before any request is built or sent. The
/// analyzer holds no state and applies no retry or caching — two identical
/// scans are two independent calls.
pub async fn analyze_match(
    backend: &dyn GenerativeBackend,
    resume: &SourceDocument,
    jd: &SourceDocument,
) -> Result<AnalysisResult, AppError> {
    let api_key = resolve_api_key().ok_or(AppError::MissingCredential)?;
    run_analysis(backend, &api_key, resume, jd).await
}

async fn run_analysis(
    backend: &dyn GenerativeBackend,
    api_key: &str,
    resume: &SourceDocument,
    jd: &SourceDocument,
) -> Result<AnalysisResult, AppError> {
    let request = build_scan_request(resume, jd);

    let payload = backend
        .generate(api_key, &request)
        .await
        .map_err(|e| AppError::AnalysisRequest(e.to_string()))?;

    // An empty payload is treated as "{}" so a degenerate result, not a
    // parse error, comes back when the service returns nothing.
    let payload = if payload.trim().is_empty() {
        "{}"
    } else {
        payload.as_str()
    };

    serde_json::from_str(payload).map_err(|e| AppError::AnalysisParse(e.to_string()))
}
