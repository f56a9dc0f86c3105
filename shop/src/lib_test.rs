use super::*;

#[test]
fn contains_folded_matches_mixed_case_haystack() {
    assert!(contains_folded("Segway Ninebot MAX", "ninebot"));
    assert!(contains_folded("Segway Ninebot MAX", "max"));
}

#[test]
fn contains_folded_empty_needle_matches_everything() {
    assert!(contains_folded("anything", ""));
    assert!(contains_folded("", ""));
}

#[test]
fn contains_folded_rejects_missing_text() {
    assert!(!contains_folded("Evercross", "xiaomi"));
}

#[test]
fn parse_error_messages_name_the_input() {
    assert_eq!(
        ParseError::UnknownStatus("lost".to_owned()).to_string(),
        "unknown job status: lost"
    );
    assert_eq!(
        ParseError::UnknownPriority("meh".to_owned()).to_string(),
        "unknown job priority: meh"
    );
}
