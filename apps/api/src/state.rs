use std::sync::Arc;

use crate::config::Config;
use crate::embeddings::EmbeddingService;
use crate::llm_client::OllamaClient;
use crate::scoring::skills::SynonymTable;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: OllamaClient,
    pub config: Config,
    /// Skill synonyms used by the skill and overall scorers.
    pub synonyms: Arc<SynonymTable>,
    /// Oracle-or-hash embedding strategy chosen at startup from `EMBEDDING_STRATEGY`.
    pub embeddings: Arc<EmbeddingService>,
}

impl AppState {
    pub fn new(config: Config, llm: OllamaClient, synonyms: SynonymTable) -> Self {
        let embeddings = EmbeddingService::new(config.embedding_policy, Arc::new(llm.clone()));
        Self {
            llm,
            config,
            synonyms: Arc::new(synonyms),
            embeddings: Arc::new(embeddings),
        }
    }
}
