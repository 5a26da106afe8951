//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::ats::{calculate_ats_score, AtsScoreResult};
use crate::scoring::education::calculate_education_score;
use crate::scoring::experience::calculate_experience_score;
use crate::scoring::keywords::{calculate_keyword_density_score, KeywordDensityResult};
use crate::scoring::overall::{
    calculate_overall_match_score, JobData, OverallMatchResult, ResumeData,
};
use crate::scoring::skills::{calculate_skill_match_score, SkillMatchResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillMatchRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub job_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    pub resume_experience: Option<String>,
    pub required_experience: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    pub resume_education: Option<String>,
    pub required_education: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OverallMatchRequest {
    #[serde(default)]
    pub resume: ResumeData,
    #[serde(default)]
    pub job: JobData,
}

#[derive(Debug, Deserialize)]
pub struct KeywordDensityRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scoring/skills
pub async fn handle_skill_match(
    State(state): State<AppState>,
    Json(request): Json<SkillMatchRequest>,
) -> Json<SkillMatchResult> {
    Json(calculate_skill_match_score(
        &request.resume_skills,
        &request.job_skills,
        &state.synonyms,
    ))
}

/// POST /api/v1/scoring/experience
pub async fn handle_experience(Json(request): Json<ExperienceRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: calculate_experience_score(
            request.resume_experience.as_deref(),
            request.required_experience.as_deref(),
        ),
    })
}

/// POST /api/v1/scoring/education
pub async fn handle_education(Json(request): Json<EducationRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: calculate_education_score(
            request.resume_education.as_deref(),
            request.required_education.as_deref(),
        ),
    })
}

/// POST /api/v1/scoring/overall
///
/// Weighted skills/experience/education match with the full breakdown.
pub async fn handle_overall_match(
    State(state): State<AppState>,
    Json(request): Json<OverallMatchRequest>,
) -> Json<OverallMatchResult> {
    Json(calculate_overall_match_score(
        &request.resume,
        &request.job,
        &state.synonyms,
    ))
}

/// POST /api/v1/scoring/keywords
pub async fn handle_keyword_density(
    Json(request): Json<KeywordDensityRequest>,
) -> Json<KeywordDensityResult> {
    Json(calculate_keyword_density_score(
        request.text.as_deref(),
        &request.keywords,
    ))
}

/// POST /api/v1/scoring/ats
///
/// Structural ATS check of a full resume text with fix-it recommendations.
pub async fn handle_ats_score(
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsScoreResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    Ok(Json(calculate_ats_score(&request.resume_text)))
}
