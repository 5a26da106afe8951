//! ATS readiness — structural heuristics an applicant tracking system looks for.
//!
//! Eight independent checks run against the full resume text. Each failed
//! check contributes exactly one recommendation, in check order.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scoring::round2;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static regex")
}

static CONTACT_INFO: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)(phone|email|address)"));
static SUMMARY: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)(summary|objective|profile)"));
static SKILLS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)(skills|technical skills|technologies)"));
static EXPERIENCE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)(experience|employment|work history)"));
static EDUCATION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)(education|degree|university|college)"));
static ACTION_VERBS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)(achieved|developed|implemented|managed|led|created)"));
/// Tabs or runs of 4+ whitespace characters (newlines included).
static BAD_SPACING: LazyLock<Regex> = LazyLock::new(|| pattern(r"(\t|\s{4,})"));
static QUANTIFIED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)[0-9]+%|\$[0-9]+|[0-9]+\+|[0-9]+\s*(years?|months?)"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsFactors {
    pub has_contact_info: bool,
    pub has_summary: bool,
    pub has_skills: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_keywords: bool,
    pub proper_formatting: bool,
    pub has_quantifiable_results: bool,
}

impl AtsFactors {
    pub fn evaluate(text: &str) -> Self {
        Self {
            has_contact_info: CONTACT_INFO.is_match(text),
            has_summary: SUMMARY.is_match(text),
            has_skills: SKILLS.is_match(text),
            has_experience: EXPERIENCE.is_match(text),
            has_education: EDUCATION.is_match(text),
            has_keywords: ACTION_VERBS.is_match(text),
            proper_formatting: !BAD_SPACING.is_match(text),
            has_quantifiable_results: QUANTIFIED.is_match(text),
        }
    }

    /// Each factor paired with the advice given when it is missing.
    fn checks(&self) -> [(bool, &'static str); 8] {
        [
            (
                self.has_contact_info,
                "Add clear contact information (phone, email, address)",
            ),
            (self.has_summary, "Include a professional summary or objective"),
            (self.has_skills, "Add a dedicated skills section"),
            (self.has_experience, "Include detailed work experience"),
            (self.has_education, "Add education section"),
            (
                self.has_keywords,
                "Use action verbs and keywords from job descriptions",
            ),
            (
                self.proper_formatting,
                "Improve formatting - avoid excessive tabs and spaces",
            ),
            (
                self.has_quantifiable_results,
                "Add quantifiable achievements and metrics",
            ),
        ]
    }

    pub fn passed(&self) -> usize {
        self.checks().iter().filter(|(ok, _)| *ok).count()
    }

    pub fn recommendations(&self) -> Vec<String> {
        self.checks()
            .iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, advice)| advice.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    pub score: f64,
    pub factors: AtsFactors,
    pub recommendations: Vec<String>,
}

/// Share of passed factors, rounded to 2 decimals, plus advice for each miss.
pub fn calculate_ats_score(resume_text: &str) -> AtsScoreResult {
    let factors = AtsFactors::evaluate(resume_text);
    let total = factors.checks().len();

    AtsScoreResult {
        score: round2(factors.passed() as f64 / total as f64),
        factors,
        recommendations: factors.recommendations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_RESUME: &str = "Jane Doe | email: jane@example.com | phone: 555-0100\n\
        Summary: backend engineer.\n\
        Technical Skills: Rust, SQL\n\
        Experience: Led a team of 5 and developed a billing engine, cutting costs 30%.\n\
        Education: BSc, State University";

    #[test]
    fn test_strong_resume_scores_full() {
        let result = calculate_ats_score(STRONG_RESUME);
        assert_eq!(result.score, 1.0);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.factors.passed(), 8);
    }

    #[test]
    fn test_nothing_present_gives_eight_recommendations() {
        let result = calculate_ats_score("hello\tworld");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.recommendations.len(), 8);
        assert_eq!(
            result.recommendations[0],
            "Add clear contact information (phone, email, address)"
        );
        assert_eq!(
            result.recommendations[7],
            "Add quantifiable achievements and metrics"
        );
    }

    #[test]
    fn test_empty_text_only_passes_formatting() {
        let result = calculate_ats_score("");
        assert!(result.factors.proper_formatting);
        assert_eq!(result.recommendations.len(), 7);
        assert_eq!(result.score, 0.13);
    }

    #[test]
    fn test_excess_spacing_fails_formatting() {
        let factors = AtsFactors::evaluate("Skills:    Rust");
        assert!(!factors.proper_formatting);
        assert!(factors.has_skills);
    }

    #[test]
    fn test_quantifiable_patterns() {
        for text in ["grew revenue 40%", "saved $2000", "10+ clients", "3 months"] {
            assert!(
                AtsFactors::evaluate(text).has_quantifiable_results,
                "{text} should count as quantified"
            );
        }
    }

    #[test]
    fn test_recommendations_follow_check_order() {
        // Contact info, summary, and formatting pass.
        let result = calculate_ats_score("Email me. Profile attached.");
        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.recommendations[0], "Add a dedicated skills section");
        assert_eq!(result.score, 0.38);
    }
}
