use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

// Glyphs recognizers commonly misread as digits, and the digit each one
// stands in for. The substitution only fires directly after a digit, so
// letter fields (names, country codes) are never touched.
lazy_static! {
    pub static ref DIGIT_SHAPE_SUBSTITUTIONS: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert('O', '0');
        m.insert('I', '1');
        m.insert('B', '8');
        m.insert('S', '5');
        m
    };

    static ref NON_MRZ_CHARS: Regex = Regex::new(r"[^A-Z0-9<]").unwrap();
}

/// LineNormalizer reduces one raw recognizer line to the MRZ alphabet
/// (A-Z, 0-9 and the `<` filler) and repairs digit-run confusions.
pub struct LineNormalizer;

impl LineNormalizer {
    /// Normalize a line using the default ICAO confusion table.
    pub fn normalize(line: &str) -> String {
        Self::normalize_with(line, &DIGIT_SHAPE_SUBSTITUTIONS)
    }

    /// Normalize a line with a caller-supplied glyph-to-digit table.
    ///
    /// Always succeeds; a line with no MRZ characters normalizes to the
    /// empty string.
    pub fn normalize_with(line: &str, substitutions: &HashMap<char, char>) -> String {
        let upper = line.to_uppercase();
        let stripped = NON_MRZ_CHARS.replace_all(&upper, "");

        let mut chars: Vec<char> = stripped.chars().collect();
        // Walk left to right so a substituted digit extends the digit run
        // for the character after it. Position 0 has no left context.
        for i in 1..chars.len() {
            if chars[i - 1].is_ascii_digit() {
                if let Some(&digit) = substitutions.get(&chars[i]) {
                    chars[i] = digit;
                }
            }
        }
        chars.into_iter().collect()
    }
}
