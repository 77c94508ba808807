//! Share composer — builds the shareable result summary. The platform share
//! sheet / clipboard fallback chain lives client-side; the server only
//! composes the text.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const SHARE_TITLE: &str = "MatchFit Resume Scanner";

/// The summary line, with or without a score to brag about.
pub fn compose_share_text(score: Option<i64>) -> String {
    match score {
        Some(score) => {
            format!("I just scored a {score}% match on my resume! Check out MatchFit Scanner.")
        }
        None => "Scan your resume against any job description with MatchFit!".to_string(),
    }
}

/// Full share message: summary plus the page URL.
pub fn compose_share_message(score: Option<i64>, url: &str) -> String {
    format!("{} {}", compose_share_text(score), url)
}

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub score: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// GET /api/v1/share?score=73
pub async fn handle_share(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Json<ShareResponse> {
    Json(ShareResponse {
        title: SHARE_TITLE.to_string(),
        text: compose_share_text(query.score),
        url: state.config.public_url.clone(),
    })
}
