use log::{debug, info};

use crate::models::{MrzFormat, ParsedMrz};
use crate::processing::{CandidateDetector, ConfidenceScorer, FieldExtractor, FormatClassifier};
use crate::utils::MrzError;

/// A 2-line set whose first line reaches this length is treated as a
/// passport even without the "P<" prefix (TD3 lines are 44 wide, TD2 36).
const TD3_MIN_FIRST_LINE_LEN: usize = 40;
/// First-line prefix of a passport booklet.
const TD3_PREFIX: &str = "P<";

/// MrzParser runs the full interpretation pipeline: candidate detection,
/// layout classification, field extraction, check-digit verification and
/// confidence scoring.
///
/// The parser is stateless; one instance can serve concurrent callers.
pub struct MrzParser;

impl MrzParser {
    pub fn new() -> Self {
        MrzParser
    }

    /// Parse raw multi-line recognizer output into a structured record.
    pub fn parse_text(&self, text: &str) -> Result<ParsedMrz, MrzError> {
        let candidates = CandidateDetector::detect(text)?;
        let lines = FormatClassifier::classify(&candidates)?;
        self.parse_lines(&lines)
    }

    /// Parse an already-assembled candidate set. Sets of any length other
    /// than 2 or 3 are rejected as an unsupported layout.
    pub fn parse_lines(&self, lines: &[String]) -> Result<ParsedMrz, MrzError> {
        let format = match lines.len() {
            3 => MrzFormat::Td1,
            2 => {
                if lines[0].starts_with(TD3_PREFIX) || lines[0].len() >= TD3_MIN_FIRST_LINE_LEN {
                    MrzFormat::Td3
                } else {
                    MrzFormat::Td2
                }
            }
            n => return Err(MrzError::UnsupportedLayout(n)),
        };
        debug!("dispatching {} line(s) to the {} parser", lines.len(), format.label());

        let mut record = FieldExtractor::extract(format, lines);
        record.confidence = ConfidenceScorer::score(&record.mrz_type, &record.check_digits);
        info!(
            "parsed {} record with confidence {:.2}",
            record.mrz_type, record.confidence
        );
        Ok(record)
    }
}

impl Default for MrzParser {
    fn default() -> Self {
        MrzParser::new()
    }
}
