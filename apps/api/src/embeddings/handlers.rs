//! Axum route handlers for the Embeddings API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::embeddings::{Embedding, MostSimilar};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmbeddingsRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EmbeddingsResponse {
    pub embeddings: Vec<Embedding>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub text_a: String,
    pub text_b: String,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    pub similarity: f64,
}

#[derive(Debug, Deserialize)]
pub struct MostSimilarRequest {
    pub query: String,
    #[serde(default)]
    pub candidates: Vec<String>,
}

/// POST /api/v1/embeddings
///
/// Embeds each text in order. Oracle failures silently fall back to hash embeddings.
pub async fn handle_embeddings(
    State(state): State<AppState>,
    Json(request): Json<EmbeddingsRequest>,
) -> Result<Json<EmbeddingsResponse>, AppError> {
    if request.texts.is_empty() {
        return Err(AppError::Validation("texts cannot be empty".to_string()));
    }

    let embeddings = state.embeddings.generate_embeddings(&request.texts).await;
    Ok(Json(EmbeddingsResponse { embeddings }))
}

/// POST /api/v1/embeddings/similarity
pub async fn handle_similarity(
    State(state): State<AppState>,
    Json(request): Json<SimilarityRequest>,
) -> Json<SimilarityResponse> {
    let similarity = state
        .embeddings
        .similarity(&request.text_a, &request.text_b)
        .await;
    Json(SimilarityResponse { similarity })
}

/// POST /api/v1/embeddings/most-similar
///
/// An empty candidate list is not an error; it returns index -1.
pub async fn handle_most_similar(
    State(state): State<AppState>,
    Json(request): Json<MostSimilarRequest>,
) -> Json<MostSimilar> {
    Json(
        state
            .embeddings
            .find_most_similar(&request.query, &request.candidates)
            .await,
    )
}
