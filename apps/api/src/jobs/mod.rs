//! Job matching — model-judged fit between a resume and one or more job descriptions.
//!
//! The model is asked for `{"score", "matched_skills"}` JSON. Whatever it
//! answers is kept as an [`LlmOutput`]; answers that don't parse stay raw and
//! rank as score 0.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::jobs::prompts::job_match_prompt;
use crate::llm_client::{LlmError, LlmOutput, TextOracle};

#[derive(Debug, Clone, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch {
    pub job_title: String,
    #[serde(rename = "match")]
    pub output: LlmOutput,
}

impl JobMatch {
    pub fn score(&self) -> f64 {
        match_score(&self.output)
    }
}

/// Numeric `score` of a parsed answer; 0 when missing, non-numeric, or unparsed.
pub fn match_score(output: &LlmOutput) -> f64 {
    match output {
        LlmOutput::Parsed(value) => value
            .get("score")
            .and_then(|score| score.as_f64())
            .unwrap_or(0.0),
        LlmOutput::Unparsed(_) => 0.0,
    }
}

/// Asks the model how well a resume fits one job description.
pub async fn match_job<O>(
    oracle: &O,
    resume_text: &str,
    job_description: &str,
) -> Result<LlmOutput, LlmError>
where
    O: TextOracle + ?Sized,
{
    let text = oracle
        .generate(&job_match_prompt(resume_text, job_description))
        .await?;
    Ok(LlmOutput::from_text(&text))
}

/// Matches the resume against each job in turn, best score first.
/// Jobs with equal scores keep their input order. Any model failure aborts the batch.
pub async fn match_jobs<O>(
    oracle: &O,
    resume_text: &str,
    jobs: &[JobPosting],
) -> Result<Vec<JobMatch>, LlmError>
where
    O: TextOracle + ?Sized,
{
    info!("Matching resume against {} jobs", jobs.len());

    let mut matches = Vec::with_capacity(jobs.len());
    for job in jobs {
        let output = match_job(oracle, resume_text, &job.description).await?;
        matches.push(JobMatch {
            job_title: job.title.clone(),
            output,
        });
    }

    matches.sort_by(|a, b| b.score().total_cmp(&a.score()));
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Replies by job description, keyed on the text after "Job Description:".
    struct CannedOracle {
        replies: Vec<(&'static str, &'static str)>,
        calls: AtomicUsize,
    }

    impl CannedOracle {
        fn new(replies: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                replies,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextOracle for CannedOracle {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .iter()
                .find(|(description, _)| {
                    prompt.contains(&format!("Job Description:\n---\n{description}\n"))
                })
                .map(|(_, reply)| reply.to_string())
                .ok_or(LlmError::Api {
                    status: 503,
                    message: "model busy".to_string(),
                })
        }
    }

    fn posting(title: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_match_job_parses_json_answer() {
        let oracle = CannedOracle::new(vec![(
            "Rust backend",
            r#"{"score": 0.9, "matched_skills": ["Rust", "Tokio"]}"#,
        )]);
        let output = match_job(&oracle, "Rust dev", "Rust backend").await.unwrap();
        assert_eq!(
            output,
            LlmOutput::Parsed(json!({"score": 0.9, "matched_skills": ["Rust", "Tokio"]}))
        );
        assert_eq!(match_score(&output), 0.9);
    }

    #[tokio::test]
    async fn test_match_job_keeps_prose_answer_raw() {
        let oracle = CannedOracle::new(vec![("Chef", "Not a great fit, honestly.")]);
        let output = match_job(&oracle, "Rust dev", "Chef").await.unwrap();
        assert_eq!(
            output,
            LlmOutput::Unparsed("Not a great fit, honestly.".to_string())
        );
        assert_eq!(match_score(&output), 0.0);
    }

    #[tokio::test]
    async fn test_match_job_propagates_oracle_failure() {
        let oracle = CannedOracle::new(vec![]);
        let err = match_job(&oracle, "Rust dev", "anything").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_match_jobs_sorts_by_score_descending() {
        let oracle = CannedOracle::new(vec![
            ("Chef", "No."),
            ("Go services", r#"{"score": 0.4}"#),
            ("Rust backend", r#"{"score": 0.9}"#),
            ("Frontend", r#"{"score": "high"}"#),
        ]);
        let jobs = vec![
            posting("Cook", "Chef"),
            posting("Go Engineer", "Go services"),
            posting("Rust Engineer", "Rust backend"),
            posting("UI Engineer", "Frontend"),
        ];

        let matches = match_jobs(&oracle, "Rust dev", &jobs).await.unwrap();
        let titles: Vec<&str> = matches.iter().map(|m| m.job_title.as_str()).collect();
        // Unparsed and non-numeric scores tie at 0 and keep input order.
        assert_eq!(titles, vec!["Rust Engineer", "Go Engineer", "Cook", "UI Engineer"]);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_match_jobs_empty_list_never_calls_model() {
        let oracle = CannedOracle::new(vec![]);
        let matches = match_jobs(&oracle, "Rust dev", &[]).await.unwrap();
        assert!(matches.is_empty());
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_match_jobs_fails_when_any_call_fails() {
        let oracle = CannedOracle::new(vec![("Rust backend", r#"{"score": 0.9}"#)]);
        let jobs = vec![posting("Rust Engineer", "Rust backend"), posting("?", "unknown")];
        assert!(match_jobs(&oracle, "Rust dev", &jobs).await.is_err());
    }

    #[test]
    fn test_job_match_serializes_output_as_match() {
        let job_match = JobMatch {
            job_title: "Rust Engineer".to_string(),
            output: LlmOutput::Parsed(json!({"score": 0.9})),
        };
        assert_eq!(
            serde_json::to_value(&job_match).unwrap(),
            json!({
                "job_title": "Rust Engineer",
                "match": {"kind": "parsed", "value": {"score": 0.9}}
            })
        );
    }
}
