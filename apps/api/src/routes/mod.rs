pub mod generate;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::embeddings::handlers as embedding_handlers;
use crate::jobs::handlers as job_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Scoring API
        .route(
            "/api/v1/scoring/skills",
            post(scoring_handlers::handle_skill_match),
        )
        .route(
            "/api/v1/scoring/experience",
            post(scoring_handlers::handle_experience),
        )
        .route(
            "/api/v1/scoring/education",
            post(scoring_handlers::handle_education),
        )
        .route(
            "/api/v1/scoring/overall",
            post(scoring_handlers::handle_overall_match),
        )
        .route(
            "/api/v1/scoring/keywords",
            post(scoring_handlers::handle_keyword_density),
        )
        .route("/api/v1/scoring/ats", post(scoring_handlers::handle_ats_score))
        // Embeddings API
        .route(
            "/api/v1/embeddings",
            post(embedding_handlers::handle_embeddings),
        )
        .route(
            "/api/v1/embeddings/similarity",
            post(embedding_handlers::handle_similarity),
        )
        .route(
            "/api/v1/embeddings/most-similar",
            post(embedding_handlers::handle_most_similar),
        )
        // Jobs API
        .route("/api/v1/jobs/match", post(job_handlers::handle_match_job))
        .route(
            "/api/v1/jobs/match-multiple",
            post(job_handlers::handle_match_jobs),
        )
        // Raw model access
        .route("/api/v1/generate", post(generate::handle_generate))
        .with_state(state)
}
