use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{MrzFormat, ParsedMrz};
use crate::processing::checksum;

lazy_static! {
    static ref SIX_DIGITS: Regex = Regex::new(r"^\d{6}$").unwrap();
}

const FILLER: char = '<';
const NAME_SEPARATOR: &str = "<<";
/// Two-digit years below the pivot map to 20xx, the rest to 19xx.
const DATE_PIVOT_YEAR: u32 = 30;

/// A fixed-width field slice: character positions [start, end) on one line.
#[derive(Debug, Clone, Copy)]
struct Span {
    line: usize,
    start: usize,
    end: usize,
}

/// A single character position, used for embedded check digits and sex.
#[derive(Debug, Clone, Copy)]
struct Pos {
    line: usize,
    col: usize,
}

/// Offset table for one MRZ layout. The three layouts differ only in
/// where fields sit and how result keys are named, so one extractor runs
/// all of them.
struct FormatLayout {
    document_type: Span,
    issuing_country: Span,
    number_key: &'static str,
    number: Span,
    number_check: Pos,
    number_check_key: &'static str,
    nationality: Span,
    birth: Span,
    birth_check: Pos,
    sex: Pos,
    expiry: Span,
    expiry_check: Pos,
    /// TD1 carries a second, unchecked optional block on line 1.
    optional_lead: Option<Span>,
    optional: Span,
    optional_check: Pos,
    optional_check_key: &'static str,
    /// TD3 closes line 2 with a composite check digit.
    composite_check: Option<Pos>,
    /// Name block: this column through the end of the line.
    name_line: usize,
    name_start: usize,
}

const TD1_LAYOUT: FormatLayout = FormatLayout {
    document_type: Span { line: 0, start: 0, end: 2 },
    issuing_country: Span { line: 0, start: 2, end: 5 },
    number_key: "document_number",
    number: Span { line: 0, start: 5, end: 14 },
    number_check: Pos { line: 0, col: 14 },
    number_check_key: "document_number_valid",
    nationality: Span { line: 1, start: 15, end: 18 },
    birth: Span { line: 1, start: 0, end: 6 },
    birth_check: Pos { line: 1, col: 6 },
    sex: Pos { line: 1, col: 7 },
    expiry: Span { line: 1, start: 8, end: 14 },
    expiry_check: Pos { line: 1, col: 14 },
    optional_lead: Some(Span { line: 0, start: 15, end: 30 }),
    optional: Span { line: 1, start: 18, end: 29 },
    optional_check: Pos { line: 1, col: 29 },
    optional_check_key: "optional2_valid",
    composite_check: None,
    name_line: 2,
    name_start: 0,
};

const TD2_LAYOUT: FormatLayout = FormatLayout {
    document_type: Span { line: 0, start: 0, end: 1 },
    issuing_country: Span { line: 0, start: 2, end: 5 },
    number_key: "passport_number",
    number: Span { line: 1, start: 0, end: 9 },
    number_check: Pos { line: 1, col: 9 },
    number_check_key: "passport_valid",
    nationality: Span { line: 1, start: 10, end: 13 },
    birth: Span { line: 1, start: 13, end: 19 },
    birth_check: Pos { line: 1, col: 19 },
    sex: Pos { line: 1, col: 20 },
    expiry: Span { line: 1, start: 21, end: 27 },
    expiry_check: Pos { line: 1, col: 27 },
    optional_lead: None,
    optional: Span { line: 1, start: 28, end: 35 },
    optional_check: Pos { line: 1, col: 35 },
    optional_check_key: "optional_valid",
    composite_check: None,
    name_line: 0,
    name_start: 5,
};

const TD3_LAYOUT: FormatLayout = FormatLayout {
    document_type: Span { line: 0, start: 0, end: 1 },
    issuing_country: Span { line: 0, start: 2, end: 5 },
    number_key: "passport_number",
    number: Span { line: 1, start: 0, end: 9 },
    number_check: Pos { line: 1, col: 9 },
    number_check_key: "passport_valid",
    nationality: Span { line: 1, start: 10, end: 13 },
    birth: Span { line: 1, start: 13, end: 19 },
    birth_check: Pos { line: 1, col: 19 },
    sex: Pos { line: 1, col: 20 },
    expiry: Span { line: 1, start: 21, end: 27 },
    expiry_check: Pos { line: 1, col: 27 },
    optional_lead: None,
    optional: Span { line: 1, start: 28, end: 42 },
    optional_check: Pos { line: 1, col: 42 },
    optional_check_key: "optional_valid",
    composite_check: Some(Pos { line: 1, col: 43 }),
    name_line: 0,
    name_start: 5,
};

fn layout_for(format: MrzFormat) -> &'static FormatLayout {
    match format {
        MrzFormat::Td1 => &TD1_LAYOUT,
        MrzFormat::Td2 => &TD2_LAYOUT,
        MrzFormat::Td3 => &TD3_LAYOUT,
    }
}

/// FieldExtractor slices a classified line set into semantic fields and
/// recomputes the embedded check digits.
pub struct FieldExtractor;

impl FieldExtractor {
    /// Extract a record for the given layout. Lines are right-padded with
    /// fillers to the layout width first; padding never truncates, so
    /// overlong lines pass through intact. Malformed but well-shaped input
    /// still yields a record; the check-digit outcomes flag it as
    /// untrustworthy. Confidence is attached later by the dispatcher.
    pub fn extract(format: MrzFormat, lines: &[String]) -> ParsedMrz {
        let layout = layout_for(format);
        let width = format.line_width();
        let rows: Vec<Vec<char>> = (0..format.line_count())
            .map(|i| {
                let mut row: Vec<char> =
                    lines.get(i).map(String::as_str).unwrap_or("").chars().collect();
                while row.len() < width {
                    row.push(FILLER);
                }
                row
            })
            .collect();

        let slice = |span: Span| -> String { rows[span.line][span.start..span.end].iter().collect() };
        let at = |pos: Pos| -> char { rows[pos.line][pos.col] };

        let number = slice(layout.number);
        let birth = slice(layout.birth);
        let expiry = slice(layout.expiry);
        let optional = slice(layout.optional);
        let (surname, given_names) = split_name(&rows[layout.name_line], layout.name_start);

        let optional_data = match layout.optional_lead {
            Some(lead) => format!("{}{}", slice(lead), optional),
            None => optional.clone(),
        };

        let mut record = ParsedMrz::new(format, lines.to_vec());

        let mut fields: BTreeMap<String, Option<String>> = BTreeMap::new();
        fields.insert("document_type".into(), Some(slice(layout.document_type)));
        fields.insert("issuing_country".into(), Some(slice(layout.issuing_country)));
        fields.insert(layout.number_key.into(), Some(strip_fillers(&number)));
        fields.insert("surname".into(), Some(surname));
        fields.insert("given_names".into(), Some(given_names));
        fields.insert("nationality".into(), Some(slice(layout.nationality)));
        fields.insert("date_of_birth".into(), convert_date(&birth));
        fields.insert("sex".into(), Some(at(layout.sex).to_string()));
        fields.insert("date_of_expiry".into(), convert_date(&expiry));
        fields.insert("optional_data".into(), Some(strip_fillers(&optional_data)));

        let mut checks: BTreeMap<String, Option<bool>> = BTreeMap::new();
        checks.insert(
            layout.number_check_key.into(),
            Some(checksum::verify(&number, at(layout.number_check))),
        );
        checks.insert("dob_valid".into(), Some(checksum::verify(&birth, at(layout.birth_check))));
        checks.insert(
            "expiry_valid".into(),
            Some(checksum::verify(&expiry, at(layout.expiry_check))),
        );
        checks.insert(
            layout.optional_check_key.into(),
            Some(checksum::verify(&optional, at(layout.optional_check))),
        );

        if let Some(pos) = layout.composite_check {
            // The composite runs over the value fields and their embedded
            // check digits as one concatenated field.
            let composite = format!(
                "{}{}{}{}{}{}{}{}{}{}",
                number,
                at(layout.number_check),
                slice(layout.nationality),
                birth,
                at(layout.birth_check),
                at(layout.sex),
                expiry,
                at(layout.expiry_check),
                optional,
                at(layout.optional_check),
            );
            checks.insert("composite_valid".into(), Some(checksum::verify(&composite, at(pos))));
        }

        record.fields = fields;
        record.check_digits = checks;
        record
    }
}

/// Split a name block on the first double-filler separator into surname
/// and given names, mapping remaining fillers to spaces.
fn split_name(row: &[char], start: usize) -> (String, String) {
    let section: String = row[start..].iter().collect();
    let (surname, given) = match section.split_once(NAME_SEPARATOR) {
        Some((s, g)) => (s, g),
        None => (section.as_str(), ""),
    };
    (
        surname.replace(FILLER, " ").trim().to_string(),
        given.replace(FILLER, " ").trim().to_string(),
    )
}

fn strip_fillers(value: &str) -> String {
    value.chars().filter(|&c| c != FILLER).collect()
}

/// Convert a YYMMDD substring to an ISO 8601 date string. Anything that
/// is not exactly six digits converts to None. Month and day are carried
/// through verbatim with no calendar check.
fn convert_date(digits: &str) -> Option<String> {
    if !SIX_DIGITS.is_match(digits) {
        return None;
    }
    let yy: u32 = digits[..2].parse().ok()?;
    let year = if yy < DATE_PIVOT_YEAR { 2000 + yy } else { 1900 + yy };
    Some(format!("{}-{}-{}", year, &digits[2..4], &digits[4..6]))
}
