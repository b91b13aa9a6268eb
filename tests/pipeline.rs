//! End-to-end tests driving the pipeline from raw recognizer text.

use mrzkit::{MrzError, MrzFormat, MrzParser};

#[test]
fn td3_passport_end_to_end() {
    let text = "REPUBLIC OF UTOPIA\nPASSPORT / PASSEPORT\n\n\
                P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                L898902C36UTO7408122F1204159ZE184226R<<<<<70\n";
    let record = MrzParser::new().parse_text(text).unwrap();

    assert_eq!(record.format, MrzFormat::Td3);
    assert_eq!(record.mrz_type, "TD3 (Passport)");
    assert_eq!(record.field("passport_number"), Some("L898902C3"));
    assert_eq!(record.field("surname"), Some("ERIKSSON"));
    assert_eq!(record.field("given_names"), Some("ANNA MARIA"));
    assert_eq!(record.field("date_of_birth"), Some("1974-08-12"));
    assert_eq!(record.field("date_of_expiry"), Some("2012-04-15"));

    // All five check digits verify, so the score clamps at 1.0 and in any
    // case sits well above the 0.6 floor for a fully verified passport.
    assert!(record.check_digits.values().all(|v| *v == Some(true)));
    assert!(record.confidence >= 0.6);
    assert_eq!(record.confidence, 1.0);
}

#[test]
fn td3_with_recognition_noise_is_repaired() {
    // Lowercase text with digit-run confusions (o for 0) as recognizers
    // commonly produce them.
    let text = "p<utoeriksson<<anna<maria<<<<<<<<<<<<<<<<<<<\n\
                l898902c36uto74o8122f12o4159ze184226r<<<<<7o\n";
    let record = MrzParser::new().parse_text(text).unwrap();

    assert_eq!(record.format, MrzFormat::Td3);
    assert_eq!(record.field("date_of_birth"), Some("1974-08-12"));
    assert!(record.check_digits.values().all(|v| *v == Some(true)));
    assert_eq!(record.confidence, 1.0);
}

#[test]
fn td1_id_card_end_to_end() {
    let text = "I<UTOD231458907<<<<<<<<<<<<<<<\n\
                7408122F1204159UTO<<<<<<<<<<<0\n\
                ERIKSSON<<ANNA<MARIA<<<<<<<<<<\n";
    let record = MrzParser::new().parse_text(text).unwrap();

    assert_eq!(record.mrz_type, "TD1 (ID Card)");
    assert_eq!(record.field("document_number"), Some("D23145890"));
    assert_eq!(record.check_digits.len(), 4);
    assert!(record.check_digits.values().all(|v| *v == Some(true)));
    assert_eq!(record.confidence, 1.0);
}

#[test]
fn td2_pair_end_to_end() {
    let text = "I<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<\n\
                D231458907UTO7408122F1204159<<<<<<<0\n";
    let record = MrzParser::new().parse_text(text).unwrap();

    assert_eq!(record.mrz_type, "TD2 (Visa)");
    assert_eq!(record.field("passport_number"), Some("D23145890"));
    assert!(record.check_digits.values().all(|v| *v == Some(true)));
    assert_eq!(record.confidence, 1.0);
}

#[test]
fn empty_input_reports_no_candidates() {
    let parser = MrzParser::new();
    assert_eq!(parser.parse_text("").unwrap_err(), MrzError::NoCandidatesFound);
    assert_eq!(parser.parse_text("  \n \t \n").unwrap_err(), MrzError::NoCandidatesFound);
}

#[test]
fn single_candidate_reports_insufficient_lines() {
    let text = "REPUBLIC OF UTOPIA\nP<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n";
    assert_eq!(
        MrzParser::new().parse_text(text).unwrap_err(),
        MrzError::InsufficientLines
    );
}

#[test]
fn corrupted_check_digits_lower_confidence_but_still_parse() {
    // Expiry check digit altered: the record is still produced, with the
    // failure flagged and the score reduced.
    let text = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                L898902C36UTO7408122F1204150ZE184226R<<<<<70\n";
    let record = MrzParser::new().parse_text(text).unwrap();

    assert_eq!(record.check("expiry_valid"), Some(false));
    // Composite covers the expiry check digit, so it fails too.
    assert_eq!(record.check("composite_valid"), Some(false));
    assert!(record.confidence < 1.0);
    assert!((record.confidence - 0.7).abs() < 1e-9); // 3 of 5 + TD bonus
}

#[test]
fn record_serializes_to_the_service_contract() {
    let text = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                L898902C36UTO7408122F1204159ZE184226R<<<<<70\n";
    let record = MrzParser::new().parse_text(text).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["mrz_type"], "TD3 (Passport)");
    assert_eq!(json["fields"]["passport_number"], "L898902C3");
    assert_eq!(json["check_digits"]["composite_valid"], true);
    assert_eq!(json["confidence"], 1.0);
    assert_eq!(json["raw_lines"].as_array().unwrap().len(), 2);
}

#[test]
fn dates_that_fail_the_digit_pattern_serialize_as_null() {
    // Birth date field corrupted beyond digit repair (letters after
    // letters are never substituted).
    let text = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                L898902C36UTOXXABYZ2F1204159ZE184226R<<<<<70\n";
    let record = MrzParser::new().parse_text(text).unwrap();
    assert_eq!(record.field("date_of_birth"), None);
    let json = serde_json::to_value(&record).unwrap();
    assert!(json["fields"]["date_of_birth"].is_null());
}
