use log::debug;

use crate::utils::MrzError;

/// Candidate lengths accepted as TD1 rows (30 nominal, with recognizer
/// slack either side).
const TD1_LEN_RANGE: std::ops::RangeInclusive<usize> = 28..=36;
/// First-line prefix that marks a passport (TD3) booklet.
const TD3_PREFIX: &str = "P<";

/// One classification rule: a named transform that either selects a usable
/// line set from the candidates or declines.
struct LayoutRule {
    name: &'static str,
    select: fn(&[String]) -> Option<Vec<String>>,
}

// Priority is fixed: a malformed 2-line document with an accidental "P<"
// prefix resolves to the passport rule, never the length fallback.
const LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule { name: "td1-triplet", select: select_td1_triplet },
    LayoutRule { name: "td3-passport-prefix", select: select_td3_pair },
    LayoutRule { name: "td2-longest-pair", select: select_td2_pair },
];

/// Three candidates of TD1 width, first three in source order.
fn select_td1_triplet(candidates: &[String]) -> Option<Vec<String>> {
    let rows: Vec<&String> = candidates
        .iter()
        .filter(|c| TD1_LEN_RANGE.contains(&c.len()))
        .collect();
    if rows.len() >= 3 {
        return Some(rows[..3].iter().map(|c| c.to_string()).collect());
    }
    None
}

/// A "P<" line plus the longest of the remaining candidates. Ties on
/// length keep the earliest occurrence.
fn select_td3_pair(candidates: &[String]) -> Option<Vec<String>> {
    let line1 = candidates.iter().find(|c| c.starts_with(TD3_PREFIX))?;
    let others: Vec<&String> = candidates.iter().filter(|c| *c != line1).collect();
    let mut longest = *others.first()?;
    for &c in &others[1..] {
        if c.len() > longest.len() {
            longest = c;
        }
    }
    Some(vec![line1.clone(), longest.clone()])
}

/// Fallback: the two longest candidates, selected by length alone. Their
/// original top-to-bottom order is not guaranteed.
fn select_td2_pair(candidates: &[String]) -> Option<Vec<String>> {
    if candidates.len() < 2 {
        return None;
    }
    let mut by_length: Vec<&String> = candidates.iter().collect();
    by_length.sort_by(|a, b| b.len().cmp(&a.len())); // stable, keeps source order on ties
    Some(by_length[..2].iter().map(|c| c.to_string()).collect())
}

/// FormatClassifier assembles detected candidates into the 2- or 3-line
/// set a field parser can consume, trying each layout rule in priority
/// order.
pub struct FormatClassifier;

impl FormatClassifier {
    pub fn classify(candidates: &[String]) -> Result<Vec<String>, MrzError> {
        for rule in LAYOUT_RULES {
            if let Some(lines) = (rule.select)(candidates) {
                debug!("layout rule '{}' selected {} line(s)", rule.name, lines.len());
                return Ok(lines);
            }
        }
        Err(MrzError::InsufficientLines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn three_td1_width_rows_classify_as_triplet() {
        let candidates = s(&[
            "I<UTOD231458907<<<<<<<<<<<<<<<",
            "7408122F1204159UTO<<<<<<<<<<<0",
            "ERIKSSON<<ANNA<MARIA<<<<<<<<<<",
        ]);
        let lines = FormatClassifier::classify(&candidates).unwrap();
        assert_eq!(lines, candidates);
    }

    #[test]
    fn td1_takes_first_three_matching_rows_in_source_order() {
        let candidates: Vec<String> = ["A", "B", "C", "D"]
            .iter()
            .map(|c| format!("{}<<{}", c, c.repeat(27)))
            .collect();
        assert!(candidates.iter().all(|c| c.len() == 30));
        let lines = FormatClassifier::classify(&candidates).unwrap();
        assert_eq!(lines, candidates[..3].to_vec());
    }

    #[test]
    fn passport_prefix_wins_over_length_fallback() {
        // Both lines are the same length; the P< prefix must decide.
        let l1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let l2 = "L898902C36UTO7408122F1204159ZE184226R<<<<<70";
        let lines = FormatClassifier::classify(&s(&[l2, l1])).unwrap();
        assert_eq!(lines, s(&[l1, l2]));
    }

    #[test]
    fn td3_second_line_is_longest_other_first_wins_ties() {
        let l1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string();
        let short = "I<UTOD231458907<<<<<<<<<<<<<<<".to_string();
        let a = format!("A<<{}", "A".repeat(41));
        let b = format!("B<<{}", "B".repeat(41));
        let candidates = vec![short, l1.clone(), a.clone(), b];
        let lines = FormatClassifier::classify(&candidates).unwrap();
        assert_eq!(lines, vec![l1, a]);
    }

    #[test]
    fn equal_length_pair_without_prefix_falls_back_to_td2() {
        let l1 = "I<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<";
        let l2 = "D231458907UTO7408122F1204159<<<<<<<0";
        let lines = FormatClassifier::classify(&s(&[l1, l2])).unwrap();
        // Stable sort keeps source order on equal lengths.
        assert_eq!(lines, s(&[l1, l2]));
    }

    #[test]
    fn single_candidate_is_insufficient() {
        let only = s(&["P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<"]);
        assert_eq!(
            FormatClassifier::classify(&only),
            Err(MrzError::InsufficientLines)
        );
        let non_passport = s(&["D231458907UTO7408122F1204159<<<<<<<0"]);
        assert_eq!(
            FormatClassifier::classify(&non_passport),
            Err(MrzError::InsufficientLines)
        );
    }
}
