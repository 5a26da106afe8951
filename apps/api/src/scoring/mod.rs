// Lexical scoring: deterministic resume-vs-job matching with no model calls.
// Every scorer degrades to a neutral or zero value on missing input instead of erroring.

pub mod ats;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod keywords;
pub mod overall;
pub mod skills;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns `None` for absent or empty text so scorers can apply their absence rules.
pub(crate) fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
