use serde::{Deserialize, Serialize};

use crate::scoring::present;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensityResult {
    /// Unrounded fraction of keywords found.
    pub score: f64,
    /// Keywords as supplied by the caller, not normalized.
    pub matched_keywords: Vec<String>,
    pub total_keywords: usize,
    pub matched_count: usize,
}

/// Case-insensitive substring test of each keyword against the whole text.
/// Absent text or an empty keyword list scores 0 with zero totals.
pub fn calculate_keyword_density_score(
    text: Option<&str>,
    keywords: &[String],
) -> KeywordDensityResult {
    let Some(text) = present(text).filter(|_| !keywords.is_empty()) else {
        return KeywordDensityResult {
            score: 0.0,
            matched_keywords: vec![],
            total_keywords: 0,
            matched_count: 0,
        };
    };

    let text_lower = text.to_lowercase();
    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| text_lower.contains(&k.to_lowercase()))
        .cloned()
        .collect();

    let matched_count = matched_keywords.len();
    KeywordDensityResult {
        score: matched_count as f64 / keywords.len() as f64,
        matched_keywords,
        total_keywords: keywords.len(),
        matched_count,
    }
}
