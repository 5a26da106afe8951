// Prompt constants for the Jobs module.

/// Resume-vs-job evaluation prompt.
/// Replace `{resume_text}` and `{job_description}` before sending.
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"You are a career AI assistant.

Resume:
---
{resume_text}

Job Description:
---
{job_description}

TASKS:
1. Evaluate how well the candidate's skills match this job.
2. Return a SIMILARITY SCORE between 0 and 1 (1 = perfect fit)
3. List the top 5 matching skills/keywords.

Return JSON like this:
{
  "score": 0.87,
  "matched_skills": ["JavaScript", "Node.js", "React"]
}"#;

pub fn job_match_prompt(resume_text: &str, job_description: &str) -> String {
    JOB_MATCH_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
