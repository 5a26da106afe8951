//! Skill matching — exact, containment, and synonym-aware comparison of skill lists.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::round2;

// ────────────────────────────────────────────────────────────────────────────
// Synonym table
// ────────────────────────────────────────────────────────────────────────────

const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript"]),
    ("python", &["py"]),
    ("react", &["reactjs", "react.js"]),
    ("node.js", &["nodejs", "node"]),
    ("sql", &["mysql", "postgresql", "postgres"]),
    ("aws", &["amazon web services"]),
    ("docker", &["containerization"]),
    ("kubernetes", &["k8s"]),
    ("machine learning", &["ml", "ai"]),
    ("artificial intelligence", &["ai", "machine learning"]),
];

/// Canonical skill name → known alternative spellings. All entries lower-cased.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>")]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_SYNONYMS
                .iter()
                .map(|(canonical, synonyms)| {
                    (
                        canonical.to_string(),
                        synonyms.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Vec<String>>> for SynonymTable {
    fn from(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self::new(entries)
    }
}

impl SynonymTable {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(canonical, synonyms)| {
                (
                    normalize(&canonical),
                    synonyms.iter().map(|s| normalize(s)).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Loads a table from a JSON object of `canonical -> [synonym, ...]`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read synonym table {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Synonym table {} is not valid JSON", path.display()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alternative names for a normalized skill, in both directions:
    /// its synonyms when it is canonical, and every canonical that lists it.
    pub fn expand(&self, skill: &str) -> Vec<&str> {
        let mut expansions: Vec<&str> = self
            .entries
            .get(skill)
            .map(|synonyms| synonyms.iter().map(String::as_str).collect())
            .unwrap_or_default();

        for (canonical, synonyms) in &self.entries {
            if synonyms.iter().any(|s| s == skill) {
                expansions.push(canonical);
            }
        }

        expansions
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skill match score
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub score: f64,
    /// Normalized (trimmed, lower-cased) job skills that were covered.
    pub matched_skills: Vec<String>,
    pub total_required: usize,
    pub matched_count: usize,
}

impl SkillMatchResult {
    fn empty() -> Self {
        Self {
            score: 0.0,
            matched_skills: vec![],
            total_required: 0,
            matched_count: 0,
        }
    }
}

/// Fraction of job skills covered by the resume skills, rounded to 2 decimals.
///
/// A job skill is covered when some resume skill equals it, contains it or is
/// contained by it, or does the same with one of its synonyms. Duplicate job
/// skills each count toward the total.
pub fn calculate_skill_match_score(
    resume_skills: &[String],
    job_skills: &[String],
    synonyms: &SynonymTable,
) -> SkillMatchResult {
    if resume_skills.is_empty() || job_skills.is_empty() {
        return SkillMatchResult::empty();
    }

    // Blank resume entries would "contain-match" every job skill.
    let resume: Vec<String> = resume_skills
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();
    let job: Vec<String> = job_skills.iter().map(|s| normalize(s)).collect();

    let matched_skills: Vec<String> = job
        .iter()
        .filter(|job_skill| is_covered(job_skill, &resume, synonyms))
        .cloned()
        .collect();

    let total_required = job.len();
    let matched_count = matched_skills.len();

    SkillMatchResult {
        score: round2(matched_count as f64 / total_required as f64),
        matched_skills,
        total_required,
        matched_count,
    }
}

fn is_covered(job_skill: &str, resume: &[String], synonyms: &SynonymTable) -> bool {
    let variations = synonyms.expand(job_skill);

    resume.iter().any(|resume_skill| {
        overlaps(resume_skill, job_skill)
            || variations
                .iter()
                .any(|variation| overlaps(resume_skill, variation))
    })
}

/// Equality or containment in either direction.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}
