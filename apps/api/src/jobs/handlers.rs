//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::{match_job, match_jobs, JobMatch, JobPosting};
use crate::llm_client::LlmOutput;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchJobRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct MatchJobResponse {
    #[serde(rename = "match")]
    pub output: LlmOutput,
}

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub resume_text: String,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct MatchJobsResponse {
    pub matches: Vec<JobMatch>,
    pub total_jobs: usize,
}

/// POST /api/v1/jobs/match
pub async fn handle_match_job(
    State(state): State<AppState>,
    Json(request): Json<MatchJobRequest>,
) -> Result<Json<MatchJobResponse>, AppError> {
    if request.resume_text.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text and job_description are required".to_string(),
        ));
    }

    let output = match_job(&state.llm, &request.resume_text, &request.job_description).await?;
    Ok(Json(MatchJobResponse { output }))
}

/// POST /api/v1/jobs/match-multiple
///
/// One model call per job, in order; results come back best score first.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<MatchJobsResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text is required".to_string()));
    }

    let matches = match_jobs(&state.llm, &request.resume_text, &request.jobs).await?;
    Ok(Json(MatchJobsResponse {
        total_jobs: request.jobs.len(),
        matches,
    }))
}
