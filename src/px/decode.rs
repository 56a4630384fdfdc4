//! DATA-block decoding for PX texts.
//!
//! Real SCB exports vary in casing, line breaking, decimal separators, and
//! the encoding of `år`, so the decoder is deliberately forgiving: tokens
//! that do not look like numbers are skipped, and a text without a DATA
//! block yields an empty result rather than an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::px::labels::extract_categories;

/// First `DATA = ... ;` statement, case-insensitive, non-greedy up to the
/// first terminating semicolon.
static DATA_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)DATA\s*=\s*(.*?);").expect("DATA regex is valid"));

/// A numeric token: optional sign, digits, optional `.` or `,` fraction.
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]+(?:[.,][0-9]+)?$").expect("numeric token regex is valid")
});

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break regex is valid"));

/// Decoded PX content.
///
/// `values` and `categories` come from independent statements and their
/// lengths are not reconciled here; callers that need pairwise alignment
/// must check [`ParsedSeries::is_aligned`] and decide what to do with the
/// surplus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSeries {
    /// Numeric tokens of the first DATA block, in order.
    pub values: Vec<f64>,
    /// Year/category labels, possibly empty, possibly a different length
    /// than `values`.
    pub categories: Vec<String>,
    /// The matched DATA block with line breaks collapsed, for diagnostics.
    pub raw_data_block: String,
}

impl ParsedSeries {
    /// Whether every value has a matching category label.
    pub fn is_aligned(&self) -> bool {
        self.values.len() == self.categories.len()
    }
}

/// Decode a PX text into its numeric series and category labels.
///
/// Only the first DATA block is used when several exist. Label statements
/// are searched across the whole text, not just inside the block.
pub fn parse_px(text: &str) -> ParsedSeries {
    let raw_data_block = match DATA_BLOCK.captures(text) {
        Some(caps) => collapse_lines(&caps[1]),
        None => String::new(),
    };

    let values = raw_data_block
        .split_whitespace()
        .filter(|t| NUMERIC_TOKEN.is_match(t))
        .filter_map(|t| t.replace(',', ".").parse::<f64>().ok())
        .collect();

    ParsedSeries {
        values,
        categories: extract_categories(text),
        raw_data_block,
    }
}

/// Collapse runs of line breaks to single spaces and trim.
pub(crate) fn collapse_lines(raw: &str) -> String {
    LINE_BREAKS.replace_all(raw, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_block_decodes_to_empty() {
        let parsed = parse_px("TITLE=\"Utsläpp av växthusgaser\";\nUNITS=\"ton\";");
        assert!(parsed.values.is_empty());
        assert!(parsed.categories.is_empty());
        assert_eq!(parsed.raw_data_block, "");
    }

    #[test]
    fn empty_text_decodes_to_empty() {
        let parsed = parse_px("");
        assert_eq!(parsed, ParsedSeries::default());
    }

    #[test]
    fn numeric_tokens_are_kept_and_garbage_skipped() {
        let parsed = parse_px("DATA = 1 2,5 -3 foo ;");
        assert_eq!(parsed.values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn comma_decimals_and_signs_parse() {
        let parsed = parse_px("DATA=+1,25 -0,5 42;");
        assert_eq!(parsed.values, vec![1.25, -0.5, 42.0]);
    }

    #[test]
    fn placeholder_tokens_are_dropped() {
        // SCB uses ".." and similar markers for missing observations.
        let parsed = parse_px("DATA= 10 .. 12 \"..\" 1.2.3 ;");
        assert_eq!(parsed.values, vec![10.0, 12.0]);
    }

    #[test]
    fn line_breaks_inside_data_are_token_separators() {
        let parsed = parse_px("DATA=\r\n 1 2\n3\r4 ;");
        assert_eq!(parsed.values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(parsed.raw_data_block, "1 2 3 4");
    }

    #[test]
    fn only_first_data_block_is_used() {
        let parsed = parse_px("DATA=1 2;\nDATA=3 4;");
        assert_eq!(parsed.values, vec![1.0, 2.0]);
    }

    #[test]
    fn data_keyword_is_case_insensitive() {
        let parsed = parse_px("data = 7 8 ;");
        assert_eq!(parsed.values, vec![7.0, 8.0]);
    }

    #[test]
    fn alignment_is_reported_not_repaired() {
        let parsed = parse_px("VALUES(\"år\")=\"2020\",\"2021\",\"2022\";\nDATA=1 2;");
        assert_eq!(parsed.values.len(), 2);
        assert_eq!(parsed.categories.len(), 3);
        assert!(!parsed.is_aligned());
    }

    #[test]
    fn aligned_series_reports_aligned() {
        let parsed = parse_px("VALUES(\"år\")=\"2020\",\"2021\";\nDATA=1 2;");
        assert!(parsed.is_aligned());
    }
}
