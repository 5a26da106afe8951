//! Embeddings — text → vector conversion and similarity search.
//!
//! Two strategies implement [`Embedder`]: [`OracleEmbedder`] asks the language
//! model, [`hash::HashEmbedder`] is deterministic and offline. [`EmbeddingService`]
//! composes them under an [`EmbeddingPolicy`] and never surfaces a failure:
//! any oracle error or number-free response drops to the hash embedder.

pub mod handlers;
pub mod hash;
pub mod oracle;
pub mod prompts;
pub mod similarity;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{LlmError, TextOracle};

pub use hash::{create_simple_embedding, HashEmbedder};
pub use oracle::OracleEmbedder;
pub use similarity::cosine_similarity;

pub type Embedding = Vec<f64>;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("oracle call failed: {0}")]
    Oracle(#[from] LlmError),

    #[error("oracle response contained no numbers")]
    NoNumericContent,
}

/// Pluggable embedding backend.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}

/// Which strategies the service tries, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingPolicy {
    /// Ask the oracle first; fall back to hashing on any failure.
    OracleWithFallback,
    /// Hash embedder only; never touches the network.
    HashOnly,
}

/// Result of a nearest-candidate search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostSimilar {
    pub best_match: Option<String>,
    /// -1 when there were no candidates.
    pub similarity: f64,
    /// -1 when there were no candidates.
    pub index: i64,
}

pub struct EmbeddingService {
    policy: EmbeddingPolicy,
    primary: Box<dyn Embedder>,
}

impl EmbeddingService {
    pub fn new(policy: EmbeddingPolicy, oracle: Arc<dyn TextOracle>) -> Self {
        let primary: Box<dyn Embedder> = match policy {
            EmbeddingPolicy::OracleWithFallback => Box::new(OracleEmbedder::new(oracle)),
            EmbeddingPolicy::HashOnly => Box::new(HashEmbedder::default()),
        };
        Self { policy, primary }
    }

    pub fn policy(&self) -> EmbeddingPolicy {
        self.policy
    }

    /// Embeds one text. Infallible: primary failures degrade to the hash embedding.
    pub async fn generate_embedding(&self, text: &str) -> Embedding {
        match self.primary.embed(text).await {
            Ok(embedding) => {
                debug!(
                    "{} embedding succeeded ({} dims)",
                    self.primary.name(),
                    embedding.len()
                );
                embedding
            }
            Err(e) => {
                warn!(
                    "{} embedding failed, using hash fallback: {e}",
                    self.primary.name()
                );
                create_simple_embedding(text)
            }
        }
    }

    /// Embeds each text in order, one at a time.
    pub async fn generate_embeddings(&self, texts: &[String]) -> Vec<Embedding> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.generate_embedding(text).await);
        }
        embeddings
    }

    /// Cosine similarity of two texts' embeddings.
    pub async fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let a = self.generate_embedding(text_a).await;
        let b = self.generate_embedding(text_b).await;
        cosine_similarity(&a, &b)
    }

    /// Linear scan for the candidate most similar to the query.
    /// Ties keep the earliest candidate; undefined (NaN) similarities never win.
    pub async fn find_most_similar(&self, query: &str, candidates: &[String]) -> MostSimilar {
        let query_embedding = self.generate_embedding(query).await;
        let candidate_embeddings = self.generate_embeddings(candidates).await;

        let mut best: Option<(usize, f64)> = None;
        for (index, embedding) in candidate_embeddings.iter().enumerate() {
            let similarity = cosine_similarity(&query_embedding, embedding);
            if similarity.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, best_similarity)| similarity > best_similarity) {
                best = Some((index, similarity));
            }
        }

        match best {
            Some((index, similarity)) => MostSimilar {
                best_match: Some(candidates[index].clone()),
                similarity,
                index: index as i64,
            },
            None => MostSimilar {
                best_match: None,
                similarity: -1.0,
                index: -1,
            },
        }
    }
}
