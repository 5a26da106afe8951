use std::sync::LazyLock;

use regex::Regex;

use crate::scoring::present;

/// "3 years", "5+ years", "1 year"
static SINGLE_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\+?\s*years?").expect("static regex"));
/// "2-4 years", "2 - 4 year"
static DASH_RANGE_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*-\s*([0-9]+)\s*years?").expect("static regex"));
/// "2 to 4 years"
static TO_RANGE_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*to\s*([0-9]+)\s*years?").expect("static regex"));

/// Compares years of experience claimed against years required.
///
/// Returns 0 when either text is absent. Otherwise 1.0 at or above the
/// requirement, 0.8 from 80%, 0.6 from 60%, and the plain ratio below that.
pub fn calculate_experience_score(
    resume_experience: Option<&str>,
    required_experience: Option<&str>,
) -> f64 {
    let (Some(resume), Some(required)) = (present(resume_experience), present(required_experience))
    else {
        return 0.0;
    };

    let resume_years = extract_years(resume);
    let required_years = extract_years(required);

    if resume_years >= required_years {
        1.0
    } else if resume_years >= required_years * 0.8 {
        0.8
    } else if resume_years >= required_years * 0.6 {
        0.6
    } else if required_years > 0.0 {
        resume_years / required_years
    } else {
        0.0
    }
}

/// Largest year count mentioned in the text; ranges count as their midpoint.
/// Text with no recognizable pattern yields 0.
pub fn extract_years(text: &str) -> f64 {
    let singles = SINGLE_YEARS
        .captures_iter(text)
        .filter_map(|c| parse_number(c.get(1)?.as_str()));

    let ranges = [&*DASH_RANGE_YEARS, &*TO_RANGE_YEARS]
        .into_iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|c| {
            let low = parse_number(c.get(1)?.as_str())?;
            let high = parse_number(c.get(2)?.as_str())?;
            Some((low + high) / 2.0)
        });

    singles.chain(ranges).fold(0.0, f64::max)
}

fn parse_number(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok()
}
