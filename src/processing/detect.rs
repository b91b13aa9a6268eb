use log::debug;

use crate::processing::normalize::LineNormalizer;
use crate::utils::MrzError;

/// A line must carry at least this many fillers to look like an MRZ row.
const MIN_FILLER_COUNT: usize = 2;
/// Shortest line accepted as a candidate; the narrowest layout is 30 wide
/// but recognizers routinely drop a few trailing characters.
const MIN_CANDIDATE_LEN: usize = 25;

/// CandidateDetector scans raw recognizer output for MRZ-like lines.
pub struct CandidateDetector;

impl CandidateDetector {
    /// Normalize every non-blank line and keep the ones structurally
    /// consistent with an MRZ row, in source order.
    pub fn detect(text: &str) -> Result<Vec<String>, MrzError> {
        let mut candidates = Vec::new();

        for raw in text.lines() {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let line = LineNormalizer::normalize(raw);
            if line.matches('<').count() >= MIN_FILLER_COUNT && line.len() >= MIN_CANDIDATE_LEN {
                candidates.push(line);
            }
        }

        debug!("detected {} MRZ candidate line(s)", candidates.len());
        if candidates.is_empty() {
            return Err(MrzError::NoCandidatesFound);
        }
        Ok(candidates)
    }
}
