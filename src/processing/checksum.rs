//! ICAO Doc 9303 check-digit arithmetic.
//!
//! Every checked MRZ field carries a single decimal digit computed with a
//! cyclic 7-3-1 weighting over the field's character values, modulo 10.

/// Weights applied cyclically by character position.
const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of one MRZ character: digits map to themselves, letters
/// to 10..=35, the filler and anything else to 0.
pub fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

/// Compute the check digit for a field.
pub fn check_digit(field: &str) -> char {
    let total: u32 = field
        .chars()
        .enumerate()
        .map(|(i, c)| char_value(c) * WEIGHTS[i % WEIGHTS.len()])
        .sum();
    char::from_digit(total % 10, 10).unwrap_or('0')
}

/// True iff the recomputed digit equals the embedded digit character.
pub fn verify(field: &str, embedded: char) -> bool {
    check_digit(field) == embedded
}
