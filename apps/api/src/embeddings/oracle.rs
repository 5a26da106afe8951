//! Oracle embeddings — asks the language model for numbers and scrapes them.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

use crate::embeddings::prompts::embedding_prompt;
use crate::embeddings::{EmbedError, Embedder, Embedding};
use crate::llm_client::TextOracle;

static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+\.?[0-9]*").expect("static regex"));

/// Embedder backed by a text oracle. Vector length is whatever the model
/// returned, so results are only comparable with each other by luck.
pub struct OracleEmbedder {
    oracle: Arc<dyn TextOracle>,
}

impl OracleEmbedder {
    pub fn new(oracle: Arc<dyn TextOracle>) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl Embedder for OracleEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        let response = self.oracle.generate(&embedding_prompt(text)).await?;
        let numbers = extract_numbers(&response);
        if numbers.is_empty() {
            return Err(EmbedError::NoNumericContent);
        }
        Ok(numbers)
    }

    fn name(&self) -> &str {
        "oracle"
    }
}

/// Every finite number-like substring in the text, in order of appearance.
/// Literals too large for `f64` are skipped.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMERIC_LITERAL
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .collect()
}
