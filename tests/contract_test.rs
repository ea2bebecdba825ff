//! Output-contract tests
//!
//! Invariants that must hold regardless of whether any real catalog
//! integration exists: simple-output formatting, schema validation at
//! construction, and the no-extra-output rules.

use fragmapper::error::FragMapperError;
use fragmapper::schema::{
    AlternateMatch, DebugInfo, InputSummary, MapperOutput, MatchStatus, Mode,
};

/// MATCH serializes to the URL alone: no label, no newline, no confidence.
#[test]
fn test_match_output_is_url_only() {
    let output = MapperOutput::matched(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        "https://www.parfumo.com/Perfumes/Dior/Sauvage",
        0.97,
        DebugInfo::default(),
    )
    .unwrap();

    let simple = output.to_simple_output();
    assert_eq!(simple, "https://www.parfumo.com/Perfumes/Dior/Sauvage");
    assert!(!simple.contains('\n'));
    assert!(!simple.contains("MATCH"));
    assert!(!simple.to_lowercase().contains("confidence"));
}

/// NO_MATCH serializes to exactly NOT_FOUND.
#[test]
fn test_no_match_output_is_not_found() {
    let output = MapperOutput::no_match(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        vec!["nothing".into()],
        DebugInfo::default(),
    );
    assert_eq!(output.to_simple_output(), "NOT_FOUND");
}

/// EXCLUDED serializes to exactly NOT_FOUND.
#[test]
fn test_excluded_output_is_not_found() {
    let output = MapperOutput::excluded(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        vec!["Input contains exclusion terms".into()],
        DebugInfo::default(),
    );
    assert_eq!(output.to_simple_output(), "NOT_FOUND");
}

/// AMBIGUOUS serializes as the header plus one URL per line, stored order.
#[test]
fn test_ambiguous_output_format() {
    let alternates = vec![
        AlternateMatch::new("https://url1.com", 0.9, None).unwrap(),
        AlternateMatch::new("https://url2.com", 0.8, None).unwrap(),
        AlternateMatch::new("https://url3.com", 0.7, None).unwrap(),
    ];
    let output = MapperOutput::ambiguous(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        alternates,
        DebugInfo::default(),
    )
    .unwrap();

    assert_eq!(
        output.to_simple_output(),
        "AMBIGUOUS\nhttps://url1.com\nhttps://url2.com\nhttps://url3.com"
    );
}

/// Serialization never re-sorts: stored order is the matcher's ranking.
#[test]
fn test_ambiguous_output_preserves_stored_order() {
    // Deliberately not sorted by confidence.
    let alternates = vec![
        AlternateMatch::new("https://low.com", 0.2, None).unwrap(),
        AlternateMatch::new("https://high.com", 0.9, None).unwrap(),
    ];
    let output = MapperOutput::ambiguous(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        alternates,
        DebugInfo::default(),
    )
    .unwrap();

    let simple = output.to_simple_output();
    let lines: Vec<&str> = simple.lines().collect();
    assert_eq!(lines, vec!["AMBIGUOUS", "https://low.com", "https://high.com"]);
}

/// Degenerate AMBIGUOUS with no alternates falls back to NOT_FOUND.
#[test]
fn test_ambiguous_without_alternates_is_not_found() {
    let output = MapperOutput::ambiguous(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        Vec::new(),
        DebugInfo::default(),
    )
    .unwrap();
    assert_eq!(output.to_simple_output(), "NOT_FOUND");
}

/// At most 5 alternate lines after the header.
#[test]
fn test_ambiguous_caps_at_five_lines() {
    let alternates: Vec<AlternateMatch> = (0..5)
        .map(|i| {
            AlternateMatch::new(format!("https://url{}.com", i), 0.9 - i as f64 * 0.1, None)
                .unwrap()
        })
        .collect();
    let output = MapperOutput::ambiguous(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        alternates,
        DebugInfo::default(),
    )
    .unwrap();

    assert_eq!(output.to_simple_output().lines().count(), 6);
}

/// Six alternates must fail construction, never silently truncate.
#[test]
fn test_six_alternates_rejected_at_construction() {
    let alternates: Vec<AlternateMatch> = (0..6)
        .map(|i| AlternateMatch::new(format!("https://url{}.com", i), 0.5, None).unwrap())
        .collect();
    let err = MapperOutput::ambiguous(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        alternates,
        DebugInfo::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FragMapperError::Schema(_)));
}

/// Out-of-range confidence must fail construction, never silently clamp.
#[test]
fn test_confidence_out_of_range_rejected() {
    let err = MapperOutput::matched(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        "https://www.parfumo.com/Perfumes/Dior/Sauvage",
        1.5,
        DebugInfo::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FragMapperError::Schema(_)));

    assert!(AlternateMatch::new("https://x.com", -0.01, None).is_err());
}

/// Status/field invariants hold for every constructor.
#[test]
fn test_envelope_invariants() {
    let matched = MapperOutput::matched(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        "https://www.parfumo.com/Perfumes/Dior/Sauvage",
        1.0,
        DebugInfo::default(),
    )
    .unwrap();
    assert_eq!(matched.status, MatchStatus::Match);
    assert!(matched.primary_url.is_some());
    assert!(matched.alternates.is_empty());

    let no_match = MapperOutput::no_match(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        Vec::new(),
        DebugInfo::default(),
    );
    assert!(no_match.primary_url.is_none());
    assert!(no_match.alternates.is_empty());

    let excluded = MapperOutput::excluded(
        Mode::DescToParfumoUrl,
        InputSummary::default(),
        Vec::new(),
        DebugInfo::default(),
    );
    assert!(excluded.primary_url.is_none());
    assert!(excluded.alternates.is_empty());
}

/// A JSON envelope with out-of-range confidence is rejected at parse
/// time, the same boundary that rejects it at construction.
#[test]
fn test_deserialization_rejects_out_of_range_confidence() {
    let json = r#"{
        "mode": "DESC_TO_PARFUMO_URL",
        "status": "MATCH",
        "primary_url": "https://www.parfumo.com/Perfumes/Dior/Sauvage",
        "confidence": 1.5
    }"#;
    assert!(serde_json::from_str::<MapperOutput>(json).is_err());
}

/// A JSON envelope with six alternates is rejected at parse time.
#[test]
fn test_deserialization_rejects_six_alternates() {
    let alternates: Vec<String> = (0..6)
        .map(|i| format!(r#"{{"url": "https://url{}.com", "confidence": 0.5}}"#, i))
        .collect();
    let json = format!(
        r#"{{"mode": "DESC_TO_PARFUMO_URL", "status": "AMBIGUOUS", "alternates": [{}]}}"#,
        alternates.join(",")
    );
    assert!(serde_json::from_str::<MapperOutput>(&json).is_err());
}

/// Alternate candidates are validated individually when parsed.
#[test]
fn test_deserialization_rejects_bad_alternate_confidence() {
    let json = r#"{"url": "https://url1.com", "confidence": -0.2}"#;
    assert!(serde_json::from_str::<AlternateMatch>(json).is_err());

    let json = r#"{"url": "https://url1.com", "confidence": 0.8}"#;
    let alt: AlternateMatch = serde_json::from_str(json).unwrap();
    assert_eq!(alt.confidence, 0.8);
    assert!(alt.note.is_none());
}

/// The envelope serializes to JSON with wire-format enum names.
#[test]
fn test_envelope_json_wire_names() {
    let output = MapperOutput::no_match(
        Mode::DescToFragranticaUrl,
        InputSummary::default(),
        Vec::new(),
        DebugInfo::default(),
    );
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"DESC_TO_FRAGRANTICA_URL\""));
    assert!(json.contains("\"NO_MATCH\""));

    let back: MapperOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, output);
}
