use anyhow::{bail, Context, Result};

use crate::embeddings::EmbeddingPolicy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub port: u16,
    pub rust_log: String,
    /// Optional JSON file replacing the built-in skill synonym table.
    pub skill_synonyms_path: Option<String>,
    pub embedding_policy: EmbeddingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_base_url: env_or("OLLAMA_BASE_URL", "http://localhost:11434"),
            ollama_model: env_or("OLLAMA_MODEL", "mistral"),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            skill_synonyms_path: std::env::var("SKILL_SYNONYMS_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            embedding_policy: parse_embedding_policy(&env_or("EMBEDDING_STRATEGY", "oracle"))?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_embedding_policy(value: &str) -> Result<EmbeddingPolicy> {
    match value.trim().to_lowercase().as_str() {
        "" | "oracle" => Ok(EmbeddingPolicy::OracleWithFallback),
        "hash" => Ok(EmbeddingPolicy::HashOnly),
        other => bail!("EMBEDDING_STRATEGY must be 'oracle' or 'hash', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults_to_oracle() {
        assert_eq!(
            parse_embedding_policy("").unwrap(),
            EmbeddingPolicy::OracleWithFallback
        );
        assert_eq!(
            parse_embedding_policy("Oracle").unwrap(),
            EmbeddingPolicy::OracleWithFallback
        );
    }

    #[test]
    fn test_policy_hash() {
        assert_eq!(
            parse_embedding_policy(" hash ").unwrap(),
            EmbeddingPolicy::HashOnly
        );
    }

    #[test]
    fn test_policy_unknown_is_error() {
        let err = parse_embedding_policy("openai").unwrap_err();
        assert!(err.to_string().contains("openai"));
    }
}
