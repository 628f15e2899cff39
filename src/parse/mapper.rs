//! Mapping of a raw tracker response into a [`Radar`].
//!
//! The tracker returns flat JSON scalars plus one free-text description
//! blob; this module resolves the scalars into their closed enums and
//! slices the blob back into its sections.

use serde_json::Value;

use super::section::{extract_first, Section};
use crate::api::types::{Classification, Product, Radar, Reproducibility};

/// Fallback chains for each recovered section, tried in order.
///
/// Reports write either "Actual Results:" or "Observed Results:", and
/// place "Notes:" before or after "Configuration:", so most fields carry
/// an alternate pair.
const SUMMARY_PAIRS: &[(Section, Section)] = &[(Section::Summary, Section::Steps)];
const STEPS_PAIRS: &[(Section, Section)] = &[(Section::Steps, Section::ExpectedResults)];
const EXPECTED_PAIRS: &[(Section, Section)] = &[
    (Section::ExpectedResults, Section::ActualResults),
    (Section::ExpectedResults, Section::ObservedResults),
];
const ACTUAL_PAIRS: &[(Section, Section)] = &[
    (Section::ActualResults, Section::Version),
    (Section::ObservedResults, Section::Version),
];
const CONFIGURATION_PAIRS: &[(Section, Section)] = &[
    (Section::Configuration, Section::Notes),
    (Section::Configuration, Section::End),
];
const NOTES_PAIRS: &[(Section, Section)] = &[
    (Section::Notes, Section::Configuration),
    (Section::Notes, Section::End),
];

/// Build a [`Radar`] from the `result` object of a fetch response.
///
/// Total over any JSON value: scalar fields default to the empty string
/// when absent or of the wrong type, and the enum fields resolve through
/// their case-insensitive, defaulting lookups. The returned radar carries
/// no identifier (identifiers are assigned server-side on create) and no
/// attachments (attachments are supplied by the caller, not parsed from
/// the payload).
pub fn map_radar_fields(result: &Value) -> Radar {
    let classification = Classification::from_name(str_field(result, "classification"));
    let reproducibility = Reproducibility::from_name(str_field(result, "reproducible"));
    let product = Product::from_name(str_field(result, "product"));
    let title = str_field(result, "title").to_string();
    let version = str_field(result, "product_version").to_string();

    let description = str_field(result, "description");
    let summary = extract_first(description, SUMMARY_PAIRS).unwrap_or_default();
    let steps = extract_first(description, STEPS_PAIRS).unwrap_or_default();
    let expected = extract_first(description, EXPECTED_PAIRS).unwrap_or_default();
    let actual = extract_first(description, ACTUAL_PAIRS).unwrap_or_default();
    let configuration = extract_first(description, CONFIGURATION_PAIRS).unwrap_or_default();

    // When no notes section exists at all, the whole description stands
    // in; an empty result becomes a single space so submission forms
    // don't treat the field as missing.
    let mut notes =
        extract_first(description, NOTES_PAIRS).unwrap_or_else(|| description.to_string());
    if notes.is_empty() {
        notes = " ".to_string();
    }

    Radar {
        id: None,
        classification,
        product,
        reproducibility,
        title,
        description: summary,
        steps,
        expected,
        actual,
        configuration,
        version,
        notes,
        attachments: Vec::new(),
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_full_description_into_sections() {
        let result = json!({
            "classification": "Serious Bug",
            "reproducible": "Always",
            "product": "iOS",
            "title": "Crashes on launch",
            "product_version": "1.0",
            "description": "Summary:\nCrashes on launch\nSteps to Reproduce:\nOpen app\nExpected Results:\nApp opens\nActual Results:\nApp crashes\nVersion:\n1.0\nConfiguration:\nNone\nNotes:\nSee attached\n"
        });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.id, None);
        assert_eq!(radar.classification, Classification::SeriousBug);
        assert_eq!(radar.reproducibility, Reproducibility::Always);
        assert_eq!(radar.product, Product::Ios);
        assert_eq!(radar.title, "Crashes on launch");
        assert_eq!(radar.version, "1.0");
        assert_eq!(radar.description, "Crashes on launch");
        assert_eq!(radar.steps, "Open app");
        assert_eq!(radar.expected, "App opens");
        assert_eq!(radar.actual, "App crashes");
        assert_eq!(radar.configuration, "None");
        assert_eq!(radar.notes, "See attached");
        assert!(radar.attachments.is_empty());
    }

    #[test]
    fn test_maps_radar_template_order_with_notes_before_configuration() {
        let result = json!({
            "description": "Summary:\nA\nSteps to Reproduce:\nB\nExpected Results:\nC\nActual Results:\nD\nVersion:\n2.0\nNotes:\nE\nConfiguration:\nF\n"
        });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.description, "A");
        assert_eq!(radar.steps, "B");
        assert_eq!(radar.expected, "C");
        assert_eq!(radar.actual, "D");
        assert_eq!(radar.notes, "E");
        assert_eq!(radar.configuration, "F");
    }

    #[test]
    fn test_observed_results_alternate_header() {
        let result = json!({
            "description": "Expected Results:\nApp opens\nObserved Results:\nApp crashes\nVersion:\n1.0\n"
        });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.expected, "App opens");
        assert_eq!(radar.actual, "App crashes");
    }

    #[test]
    fn test_missing_notes_section_uses_whole_description() {
        let description = "Summary:\nCrash\nSteps to Reproduce:\nOpen app\n";
        let result = json!({ "description": description });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.notes, description);
    }

    #[test]
    fn test_empty_description_notes_become_single_space() {
        let radar = map_radar_fields(&json!({ "description": "" }));
        assert_eq!(radar.notes, " ");

        let radar = map_radar_fields(&json!({}));
        assert_eq!(radar.notes, " ");
    }

    #[test]
    fn test_missing_sections_default_to_empty_strings() {
        let radar = map_radar_fields(&json!({ "description": "free-form text, no headers" }));
        assert_eq!(radar.description, "");
        assert_eq!(radar.steps, "");
        assert_eq!(radar.expected, "");
        assert_eq!(radar.actual, "");
        assert_eq!(radar.configuration, "");
        assert_eq!(radar.notes, "free-form text, no headers");
    }

    #[test]
    fn test_enum_fields_resolve_case_insensitively() {
        let result = json!({
            "classification": "ui/usability",
            "reproducible": "SOMETIMES",
            "product": "macos"
        });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.classification, Classification::UiUsability);
        assert_eq!(radar.reproducibility, Reproducibility::Sometimes);
        assert_eq!(radar.product, Product::MacOs);
    }

    #[test]
    fn test_unrecognized_enum_fields_use_defaults() {
        let result = json!({
            "classification": "banana",
            "reproducible": "banana",
            "product": "banana"
        });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.classification, Classification::Enhancement);
        assert_eq!(radar.reproducibility, Reproducibility::Always);
        assert_eq!(radar.product, Product::Ios);
    }

    #[test]
    fn test_wrong_typed_scalars_default_to_empty() {
        let result = json!({
            "title": 42,
            "product_version": ["1.0"],
            "description": null
        });

        let radar = map_radar_fields(&result);
        assert_eq!(radar.title, "");
        assert_eq!(radar.version, "");
        assert_eq!(radar.notes, " ");
    }
}
