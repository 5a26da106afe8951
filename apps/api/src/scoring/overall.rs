use serde::{Deserialize, Serialize};

use crate::scoring::education::calculate_education_score;
use crate::scoring::experience::calculate_experience_score;
use crate::scoring::round2;
use crate::scoring::skills::{calculate_skill_match_score, SkillMatchResult, SynonymTable};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

/// Candidate side of a match. Missing fields fall back to the sub-scorers' absence rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
}

/// Requirement side of a match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobData {
    pub required_skills: Vec<String>,
    pub required_experience: Option<String>,
    pub required_education: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: SkillMatchResult,
    pub experience: f64,
    pub education: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMatchResult {
    pub overall: f64,
    pub breakdown: MatchBreakdown,
    pub weights: ScoringWeights,
}

/// Weighted blend of skill, experience, and education scores, rounded to 2 decimals.
pub fn calculate_overall_match_score(
    resume: &ResumeData,
    job: &JobData,
    synonyms: &SynonymTable,
) -> OverallMatchResult {
    let weights = ScoringWeights::default();

    let skills = calculate_skill_match_score(&resume.skills, &job.required_skills, synonyms);
    let experience = calculate_experience_score(
        resume.experience.as_deref(),
        job.required_experience.as_deref(),
    );
    let education = calculate_education_score(
        resume.education.as_deref(),
        job.required_education.as_deref(),
    );

    let overall = round2(
        skills.score * weights.skills
            + experience * weights.experience
            + education * weights.education,
    );

    OverallMatchResult {
        overall,
        breakdown: MatchBreakdown {
            skills,
            experience,
            education,
        },
        weights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_perfect_match_is_one() {
        let resume = ResumeData {
            skills: strings(&["Rust", "Kubernetes"]),
            experience: Some("7 years".to_string()),
            education: Some("Master of Science".to_string()),
        };
        let job = JobData {
            required_skills: strings(&["rust", "k8s"]),
            required_experience: Some("5+ years".to_string()),
            required_education: Some("Bachelor's degree".to_string()),
        };

        let result = calculate_overall_match_score(&resume, &job, &SynonymTable::default());
        assert_eq!(result.breakdown.skills.score, 1.0);
        assert_eq!(result.breakdown.experience, 1.0);
        assert_eq!(result.breakdown.education, 1.0);
        assert_eq!(result.overall, 1.0);
    }

    #[test]
    fn test_empty_records_use_absence_rules() {
        let result = calculate_overall_match_score(
            &ResumeData::default(),
            &JobData::default(),
            &SynonymTable::default(),
        );
        // skills 0, experience 0, education neutral 0.5 → 0.2 * 0.5
        assert_eq!(result.breakdown.skills.total_required, 0);
        assert_eq!(result.breakdown.experience, 0.0);
        assert_eq!(result.breakdown.education, 0.5);
        assert_eq!(result.overall, 0.1);
    }

    #[test]
    fn test_overall_is_rounded_weighted_sum() {
        let resume = ResumeData {
            skills: strings(&["python"]),
            experience: Some("2 years".to_string()),
            education: Some("Bachelor".to_string()),
        };
        let job = JobData {
            required_skills: strings(&["python", "go", "sql"]),
            required_experience: Some("5 years".to_string()),
            required_education: Some("Master".to_string()),
        };

        let result = calculate_overall_match_score(&resume, &job, &SynonymTable::default());
        let b = &result.breakdown;
        let expected = round2(b.skills.score * 0.5 + b.experience * 0.3 + b.education * 0.2);
        assert_eq!(result.overall, expected);
        assert_eq!(b.skills.score, 0.33);
        assert_eq!(b.education, 0.75);
    }

    #[test]
    fn test_weights_default() {
        let weights = ScoringWeights::default();
        assert!((weights.skills + weights.experience + weights.education - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_records_deserialize_with_missing_fields() {
        let resume: ResumeData = serde_json::from_str(r#"{"skills": ["Rust"]}"#).unwrap();
        assert!(resume.experience.is_none());
        let job: JobData = serde_json::from_str("{}").unwrap();
        assert!(job.required_skills.is_empty());
    }
}
