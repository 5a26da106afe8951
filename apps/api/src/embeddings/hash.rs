//! Hash embeddings — bag-of-hashed-words vectors with no model dependency.
//!
//! Each whitespace token is hashed with the 31-multiplier polynomial string
//! hash over UTF-16 code units, wrapping in 32-bit signed arithmetic, and
//! counted into bucket `|hash| mod dims`. Bucket assignments are stable
//! across releases so stored vectors stay comparable.

use async_trait::async_trait;

use crate::embeddings::similarity::l2_normalize;
use crate::embeddings::{EmbedError, Embedder, Embedding};

/// Fixed dimension of fallback embeddings.
pub const EMBEDDING_DIM: usize = 50;

#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dim: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self { dim: EMBEDDING_DIM }
    }
}

impl HashEmbedder {
    /// Deterministic, L2-normalized embedding. Text with no tokens yields all zeros.
    pub fn embed_text(&self, text: &str) -> Embedding {
        let mut embedding = vec![0.0; self.dim];

        for token in text.to_lowercase().split_whitespace() {
            let bucket = token_hash(token).unsigned_abs() as usize % self.dim;
            embedding[bucket] += 1.0;
        }

        l2_normalize(&mut embedding);
        embedding
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        Ok(self.embed_text(text))
    }

    fn name(&self) -> &str {
        "hash"
    }
}

/// `hash = hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
pub fn token_hash(token: &str) -> i32 {
    token
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

/// Fallback embedding with the default dimension.
pub fn create_simple_embedding(text: &str) -> Embedding {
    HashEmbedder::default().embed_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: &[f64]) -> f64 {
        v.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[test]
    fn test_token_hash_known_values() {
        assert_eq!(token_hash(""), 0);
        assert_eq!(token_hash("a"), 97);
        assert_eq!(token_hash("ab"), 97 * 31 + 98);
        // Wraps past i32::MAX like 32-bit integer arithmetic.
        assert_eq!(token_hash("typescript"), -522_285_947);
        assert_eq!(token_hash("postgresql"), -2_105_481_388);
    }

    #[test]
    fn test_embedding_is_deterministic() {
        let a = create_simple_embedding("Senior Rust engineer, distributed systems");
        let b = create_simple_embedding("Senior Rust engineer, distributed systems");
        assert_eq!(a, b);
    }

    #[test]
    fn test_embedding_has_fixed_length_and_unit_norm() {
        for text in ["rust", "one two three four five", "  padded\ttext \n"] {
            let v = create_simple_embedding(text);
            assert_eq!(v.len(), EMBEDDING_DIM);
            assert!((norm(&v) - 1.0).abs() < 1e-9, "norm of {text:?} was {}", norm(&v));
        }
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        for text in ["", "   \n\t"] {
            let v = create_simple_embedding(text);
            assert_eq!(v.len(), EMBEDDING_DIM);
            assert!(v.iter().all(|x| *x == 0.0));
        }
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(create_simple_embedding("RUST"), create_simple_embedding("rust"));
    }

    #[test]
    fn test_repeated_token_accumulates_in_one_bucket() {
        let v = create_simple_embedding("go go go");
        let nonzero: Vec<f64> = v.iter().copied().filter(|x| *x != 0.0).collect();
        assert_eq!(nonzero, vec![1.0]);
    }

    #[test]
    fn test_bucket_matches_hash() {
        let v = create_simple_embedding("a");
        assert_eq!(v[97 % EMBEDDING_DIM], 1.0);
        // |-2105481388| mod 50
        let v = create_simple_embedding("PostgreSQL");
        assert_eq!(v[38], 1.0);
    }

    #[tokio::test]
    async fn test_embedder_trait_never_fails() {
        let embedder = HashEmbedder::default();
        assert_eq!(embedder.name(), "hash");
        let v = embedder.embed("hello world").await.unwrap();
        assert_eq!(v, create_simple_embedding("hello world"));
    }
}
