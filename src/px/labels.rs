//! Year-label extraction from PX metadata statements.
//!
//! The year axis can be declared by several statements depending on the
//! table and export vintage. Candidates are tried in a fixed priority
//! order and the first statement that matches wins, even when its payload
//! turns out to be blank.

use std::sync::LazyLock;

use regex::Regex;

use crate::px::decode::collapse_lines;

/// Keywords that can carry the year axis, in priority order. `CODES\(`
/// also hits the tail of `nCODES\(`; the order keeps `VALUES` and
/// `TIMEVAL` ahead of both.
const LABEL_KEYWORDS: [&str; 4] = ["VALUES", "TIMEVAL", "CODES", "nCODES"];

/// One matcher per keyword: `KEYWORD("år") = <labels> ;` with optional
/// quotes and with `år` tolerated in its mis-decoded `\u{FFFD}r` form.
static LABEL_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LABEL_KEYWORDS
        .iter()
        .map(|keyword| {
            Regex::new(&format!(
                r#"(?i){keyword}\(\s*["']?(?:år|\u{{FFFD}}r)["']?\s*\)\s*=\s*([^;]+);"#
            ))
            .expect("label regex is valid")
        })
        .collect()
});

/// Extract year/category labels from anywhere in the PX text.
///
/// Returns an empty list when no candidate statement matches. Items are
/// comma-separated, trimmed, and stripped of one surrounding quote layer;
/// empty items between commas are kept as empty strings.
pub fn extract_categories(text: &str) -> Vec<String> {
    for matcher in LABEL_MATCHERS.iter() {
        let Some(caps) = matcher.captures(text) else {
            continue;
        };
        let raw = collapse_lines(&caps[1]);
        if raw.is_empty() {
            return Vec::new();
        }
        return raw
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .collect();
    }
    Vec::new()
}

/// Strip at most one leading and one trailing quote character.
fn strip_quotes(s: &str) -> &str {
    const QUOTES: [char; 2] = ['"', '\''];
    let s = s.strip_prefix(QUOTES).unwrap_or(s);
    s.strip_suffix(QUOTES).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_statement_yields_labels() {
        let text = "VALUES(\"år\")=\"2020\",\"2021\",\"2022\";";
        assert_eq!(extract_categories(text), vec!["2020", "2021", "2022"]);
    }

    #[test]
    fn values_wins_over_timeval_regardless_of_position() {
        let text = "TIMEVAL(\"år\")=\"1990\",\"1991\";\nVALUES(\"år\")=\"2020\",\"2021\";";
        assert_eq!(extract_categories(text), vec!["2020", "2021"]);
    }

    #[test]
    fn timeval_used_when_values_missing() {
        let text = "TIMEVAL(\"år\")=\"2005\",\"2006\";";
        assert_eq!(extract_categories(text), vec!["2005", "2006"]);
    }

    #[test]
    fn ncodes_statement_is_recognized() {
        let text = "nCODES(\"år\")=\"1\",\"2\";";
        assert_eq!(extract_categories(text), vec!["1", "2"]);
    }

    #[test]
    fn misencoded_year_key_is_accepted() {
        let text = "VALUES(\"\u{FFFD}r\")=\"2020\",\"2021\";";
        assert_eq!(extract_categories(text), vec!["2020", "2021"]);
    }

    #[test]
    fn unquoted_and_uppercase_keys_are_accepted() {
        assert_eq!(extract_categories("VALUES(år)=2020,2021;"), vec!["2020", "2021"]);
        assert_eq!(extract_categories("values(\"ÅR\")=2020;"), vec!["2020"]);
    }

    #[test]
    fn keyword_must_abut_parenthesis() {
        assert!(extract_categories("VALUES (\"år\")=\"2020\";").is_empty());
    }

    #[test]
    fn one_quote_layer_is_stripped() {
        let text = "VALUES(\"år\")= '2020' ,\"2021\", 2022;";
        assert_eq!(extract_categories(text), vec!["2020", "2021", "2022"]);
    }

    #[test]
    fn empty_items_between_commas_survive() {
        assert_eq!(extract_categories("VALUES(år)=a,,b;"), vec!["a", "", "b"]);
    }

    #[test]
    fn blank_payload_yields_no_labels() {
        assert!(extract_categories("VALUES(\"år\")=   ;").is_empty());
    }

    #[test]
    fn line_breaks_in_payload_are_collapsed() {
        let text = "VALUES(\"år\")=\"2020\",\r\n\"2021\";";
        assert_eq!(extract_categories(text), vec!["2020", "2021"]);
    }

    #[test]
    fn no_candidate_statement_yields_empty() {
        assert!(extract_categories("STUB(\"år\")=\"2020\";").is_empty());
    }
}
