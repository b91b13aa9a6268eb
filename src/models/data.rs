use std::collections::BTreeMap;

use serde::Serialize;

/// ICAO Doc 9303 machine readable zone layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MrzFormat {
    Td1, // ID card, 3 lines of 30
    Td2, // Visa, 2 lines of 36
    Td3, // Passport, 2 lines of 44
}

impl MrzFormat {
    pub fn line_count(&self) -> usize {
        match self {
            MrzFormat::Td1 => 3,
            MrzFormat::Td2 => 2,
            MrzFormat::Td3 => 2,
        }
    }

    /// Fixed width every line of this format is padded to before slicing.
    pub fn line_width(&self) -> usize {
        match self {
            MrzFormat::Td1 => 30,
            MrzFormat::Td2 => 36,
            MrzFormat::Td3 => 44,
        }
    }

    /// Human-readable label carried on parsed records.
    pub fn label(&self) -> &'static str {
        match self {
            MrzFormat::Td1 => "TD1 (ID Card)",
            MrzFormat::Td2 => "TD2 (Visa)",
            MrzFormat::Td3 => "TD3 (Passport)",
        }
    }
}

/// Structured identity record produced by the pipeline.
///
/// Serializes to the flat mapping form a wrapping service relays unchanged:
/// strings or nulls under `fields`, booleans under `check_digits`, a
/// confidence float in [0.0, 1.0].
#[derive(Debug, Clone, Serialize)]
pub struct ParsedMrz {
    #[serde(skip)]
    pub format: MrzFormat,
    pub mrz_type: String,
    pub fields: BTreeMap<String, Option<String>>,
    /// Recomputed check-digit outcomes, never trusted from input.
    /// `None` marks an outcome that could not be verified.
    pub check_digits: BTreeMap<String, Option<bool>>,
    pub confidence: f64,
    /// Candidate lines the record was parsed from, post-normalization.
    pub raw_lines: Vec<String>,
}

impl ParsedMrz {
    pub fn new(format: MrzFormat, raw_lines: Vec<String>) -> Self {
        ParsedMrz {
            format,
            mrz_type: format.label().to_string(),
            fields: BTreeMap::new(),
            check_digits: BTreeMap::new(),
            confidence: 0.0,
            raw_lines,
        }
    }

    /// Convenience accessor for a populated field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    /// Convenience accessor for a check-digit outcome.
    pub fn check(&self, key: &str) -> Option<bool> {
        self.check_digits.get(key).copied().flatten()
    }
}
