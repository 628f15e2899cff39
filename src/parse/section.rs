//! Section extraction from a report's free-text description blob.
//!
//! The tracker stores a report body as one free-text string with
//! human-authored headers ("Summary:", "Steps to Reproduce:", ...). This
//! module recovers the text between two headers with regex slicing. The
//! marker catalog is explicit data rather than inline pattern literals so
//! the fallback chains in the mapper stay easy to audit.

use regex::Regex;

/// A recognized section marker within a description blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Steps,
    ExpectedResults,
    ActualResults,
    /// Alternate header some reports use instead of "Actual Results:".
    ObservedResults,
    Version,
    Notes,
    Configuration,
    /// The empty marker: matches to the end of the text.
    End,
}

impl Section {
    /// The literal header text this marker matches.
    pub fn marker(self) -> &'static str {
        match self {
            Section::Summary => "Summary:",
            Section::Steps => "Steps to Reproduce:",
            Section::ExpectedResults => "Expected Results:",
            Section::ActualResults => "Actual Results:",
            Section::ObservedResults => "Observed Results:",
            Section::Version => "Version:",
            Section::Notes => "Notes:",
            Section::Configuration => "Configuration:",
            Section::End => "",
        }
    }
}

/// Extract the text between two section markers.
///
/// Matches `begin` followed by any run of characters (line breaks
/// included) up to `end`, and returns the run trimmed of surrounding
/// whitespace. [`Section::End`] as the end marker captures to the end of
/// the text.
///
/// Returns `None` (never an error) when the pattern fails to build, the
/// text has no match, or the capture group is absent; callers treat that
/// as "section not present". Only the first match is used: reports with
/// duplicated headers are not specially handled.
pub fn extract_section(text: &str, begin: Section, end: Section) -> Option<String> {
    let pattern = format!(
        "(?s){}(.*){}",
        regex::escape(begin.marker()),
        regex::escape(end.marker())
    );
    let re = Regex::new(&pattern).ok()?;
    let captures = re.captures(text)?;
    let interior = captures.get(1)?;
    Some(interior.as_str().trim().to_string())
}

/// Try an ordered list of (begin, end) marker pairs, returning the first
/// extraction that matches.
pub fn extract_first(text: &str, pairs: &[(Section, Section)]) -> Option<String> {
    pairs
        .iter()
        .find_map(|&(begin, end)| extract_section(text, begin, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_between_two_markers() {
        let text = "Summary:\nCrashes on launch\nSteps to Reproduce:\nOpen app\n";
        let section = extract_section(text, Section::Summary, Section::Steps);
        assert_eq!(section, Some("Crashes on launch".to_string()));
    }

    #[test]
    fn test_match_spans_line_breaks() {
        let text = "Steps to Reproduce:\n1. Open app\n2. Tap button\n3. Wait\nExpected Results:\nNothing\n";
        let section = extract_section(text, Section::Steps, Section::ExpectedResults);
        assert_eq!(section, Some("1. Open app\n2. Tap button\n3. Wait".to_string()));
    }

    #[test]
    fn test_end_marker_captures_to_end_of_text() {
        let text = "Version:\n1.0\nNotes:\nworks on my machine\nwith the beta\n";
        let section = extract_section(text, Section::Notes, Section::End);
        assert_eq!(section, Some("works on my machine\nwith the beta".to_string()));
    }

    #[test]
    fn test_missing_begin_marker_is_none() {
        let text = "Steps to Reproduce:\nOpen app\n";
        assert_eq!(extract_section(text, Section::Summary, Section::Steps), None);
    }

    #[test]
    fn test_markers_in_wrong_order_is_none() {
        let text = "Steps to Reproduce:\nOpen app\nSummary:\nCrash\n";
        assert_eq!(
            extract_section(text, Section::Summary, Section::Steps),
            None
        );
    }

    #[test]
    fn test_empty_interior_trims_to_empty_string() {
        let text = "Summary:\nSteps to Reproduce:\nOpen app\n";
        assert_eq!(
            extract_section(text, Section::Summary, Section::Steps),
            Some(String::new())
        );
    }

    #[test]
    fn test_empty_text_is_none() {
        assert_eq!(extract_section("", Section::Summary, Section::Steps), None);
        assert_eq!(extract_section("", Section::Notes, Section::End), None);
    }

    #[test]
    fn test_first_match_wins_on_duplicated_headers() {
        // Duplicated headers are a known limitation: the first begin
        // marker and the last end marker bound the capture.
        let text = "Summary:\nfirst\nSteps to Reproduce:\na\nSummary:\nsecond\nSteps to Reproduce:\nb\n";
        let section = extract_section(text, Section::Summary, Section::Steps);
        assert_eq!(
            section,
            Some("first\nSteps to Reproduce:\na\nSummary:\nsecond".to_string())
        );
    }

    #[test]
    fn test_extract_first_honors_pair_order() {
        let text = "Expected Results:\nApp opens\nObserved Results:\nApp crashes\n";
        let pairs = [
            (Section::ExpectedResults, Section::ActualResults),
            (Section::ExpectedResults, Section::ObservedResults),
        ];
        assert_eq!(extract_first(text, &pairs), Some("App opens".to_string()));
    }

    #[test]
    fn test_extract_first_exhausting_all_pairs_is_none() {
        let pairs = [
            (Section::Notes, Section::Configuration),
            (Section::Notes, Section::End),
        ];
        assert_eq!(extract_first("Summary:\nno notes here\n", &pairs), None);
    }
}
