use std::collections::BTreeMap;

/// Confidence when a record carries no check-digit entries at all.
pub const NO_CHECKS_CONFIDENCE: f64 = 0.3;
/// Confidence when entries exist but none produced a boolean outcome.
pub const UNVERIFIED_CONFIDENCE: f64 = 0.4;
/// Bonus for a record whose layout resolved to a known TD class.
pub const KNOWN_FORMAT_BONUS: f64 = 0.1;

/// ConfidenceScorer folds check-digit outcomes into a single score in
/// [0.0, 1.0]. The constants above are heuristic and kept stable for
/// compatibility with existing consumers.
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn score(mrz_type: &str, check_digits: &BTreeMap<String, Option<bool>>) -> f64 {
        if check_digits.is_empty() {
            return NO_CHECKS_CONFIDENCE;
        }

        let outcomes: Vec<bool> = check_digits.values().filter_map(|v| *v).collect();
        if outcomes.is_empty() {
            return UNVERIFIED_CONFIDENCE;
        }

        let passed = outcomes.iter().filter(|&&ok| ok).count();
        let mut score = passed as f64 / outcomes.len() as f64;
        if mrz_type.starts_with("TD") {
            score += KNOWN_FORMAT_BONUS;
        }
        score.clamp(0.0, 1.0)
    }
}
