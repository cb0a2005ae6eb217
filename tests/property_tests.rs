//! Property-based tests for the field checks and completeness score.

use pdfmetadataanalyzer::{
    analyze_metadata, default_rules, CheckKind, DocumentMetadata, DEFAULT_DATE_FORMAT,
};
use proptest::prelude::*;

const FIELDS: [&str; 8] = [
    "Title",
    "Author",
    "Producer",
    "Creator",
    "CreationDate",
    "ModDate",
    "Subject",
    "Keywords",
];

/// Metadata built from a random subset of known fields with random text values.
fn metadata() -> impl Strategy<Value = DocumentMetadata> {
    prop::collection::vec((prop::sample::select(FIELDS.to_vec()), "[0-9A-Za-z:+' ]{0,20}"), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect::<DocumentMetadata>())
}

/// Dates in the exact `YYYYMMDDHHMMSS` layout.
fn exact_date() -> impl Strategy<Value = String> {
    (1900u32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| format!("{y:04}{mo:02}{d:02}{h:02}{mi:02}{s:02}"),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn score_is_passed_over_total(m in metadata()) {
        let analysis = analyze_metadata(&m, &default_rules(), DEFAULT_DATE_FORMAT);
        let score = analysis.completeness_score().unwrap();
        prop_assert!((0.0..=100.0).contains(&score));
        let expected = analysis.passed_count() as f64 / analysis.len() as f64 * 100.0;
        prop_assert_eq!(score, expected);
    }

    #[test]
    fn presence_checks_always_emitted(m in metadata()) {
        let analysis = analyze_metadata(&m, &default_rules(), DEFAULT_DATE_FORMAT);
        let presence = analysis
            .checks()
            .iter()
            .filter(|c| c.kind == CheckKind::Presence)
            .count();
        prop_assert_eq!(presence, 4);
        prop_assert!(analysis.len() >= 4 && analysis.len() <= 6);
    }

    #[test]
    fn date_checks_follow_field_presence(m in metadata()) {
        let analysis = analyze_metadata(&m, &default_rules(), DEFAULT_DATE_FORMAT);
        for field in ["CreationDate", "ModDate"] {
            let key = format!("{field} valid");
            prop_assert_eq!(analysis.get(&key).is_some(), m.contains(field));
        }
    }

    #[test]
    fn recommendations_match_failures(m in metadata()) {
        let analysis = analyze_metadata(&m, &default_rules(), DEFAULT_DATE_FORMAT);
        let failed = analysis.len() - analysis.passed_count();
        prop_assert_eq!(analysis.recommendations().len(), failed);
        prop_assert_eq!(analysis.is_complete(), failed == 0);
    }

    #[test]
    fn exact_dates_are_valid(date in exact_date()) {
        let m: DocumentMetadata = [("CreationDate", date.as_str())].into_iter().collect();
        let analysis = analyze_metadata(&m, &default_rules(), DEFAULT_DATE_FORMAT);
        prop_assert_eq!(analysis.get("CreationDate valid"), Some(true));
    }

    #[test]
    fn pdf_prefixed_dates_are_invalid(date in exact_date()) {
        let value = format!("D:{date}Z");
        let m: DocumentMetadata = [("ModDate", value.as_str())].into_iter().collect();
        let analysis = analyze_metadata(&m, &default_rules(), DEFAULT_DATE_FORMAT);
        prop_assert_eq!(analysis.get("ModDate valid"), Some(false));
    }
}
