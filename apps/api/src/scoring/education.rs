use crate::scoring::present;

/// Score used when either side does not mention education.
pub const NEUTRAL_EDUCATION_SCORE: f64 = 0.5;

/// Level assumed when no degree keyword is found.
const DEFAULT_LEVEL: u8 = 3;

/// Degree keywords in priority order. The first level with any keyword
/// present in the text wins, so "master" beats the "as" in "Master's".
const LEVEL_KEYWORDS: &[(u8, &[&str])] = &[
    (5, &["phd", "doctorate"]),
    (4, &["master"]),
    (3, &["bachelor", "bs", "ba"]),
    (2, &["associate", "aa", "as"]),
    (1, &["high school", "diploma"]),
];

/// Compares education levels. 1.0 when the resume meets the requirement,
/// otherwise the ratio of levels; the neutral 0.5 when either is absent.
pub fn calculate_education_score(
    resume_education: Option<&str>,
    required_education: Option<&str>,
) -> f64 {
    let (Some(resume), Some(required)) = (present(resume_education), present(required_education))
    else {
        return NEUTRAL_EDUCATION_SCORE;
    };

    let resume_level = education_level(resume);
    let required_level = education_level(required);

    if resume_level >= required_level {
        1.0
    } else {
        f64::from(resume_level) / f64::from(required_level)
    }
}

/// Maps free text to an ordinal degree level, 1 (high school) to 5 (doctorate).
/// Keyword checks are plain substring tests on the lower-cased text.
pub fn education_level(text: &str) -> u8 {
    let text = text.to_lowercase();
    LEVEL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or(DEFAULT_LEVEL)
}
