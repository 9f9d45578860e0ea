//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::pipeline::MatchResult;
use crate::matching::vocabulary::{vocabulary_entries, VocabularyEntry};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<VocabularyEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores a resume against a job description and returns the full result.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let result = state
        .matcher
        .evaluate(&request.resume_text, &request.jd_text)?;

    info!(
        backend = state.matcher.backend(),
        score = result.score,
        matched = result.explanation.matched_skills.len(),
        missing = result.explanation.missing_skills.len(),
        "Match computed"
    );

    Ok(Json(result))
}

/// GET /api/v1/skills
///
/// Lists the skill vocabulary in declaration order.
pub async fn handle_list_skills() -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: vocabulary_entries(),
    })
}
