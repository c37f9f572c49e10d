//! Free-text sanitizer
//!
//! [`sanitize`] strips tag-shaped fragments, non-breaking spaces and
//! surrounding whitespace from free text. Text containing any of the
//! denylisted SQL keywords is reduced to an empty string.
//!
//! The keyword denylist is a blunt heuristic: it matches substrings, so
//! `"Created"` or `"Updated at"` are dropped too, and it offers no protection
//! that parameterized queries would not already give. It is not a security
//! boundary. Tag removal is equally naive (`<[^<]+?>`, no nesting awareness).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Keywords that cause text to be dropped.
pub const SQL_KEYWORDS: [&str; 5] = ["SELECT", "DELETE", "UPDATE", "INSERT", "CREATE"];

static SQL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", SQL_KEYWORDS.join("|")))
        .expect("SQL keyword pattern is a valid regex")
});

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("markup tag pattern is a valid regex"));

const NO_BREAK_SPACE: char = '\u{a0}';

/// Returns true if `text` contains a denylisted keyword, ignoring case.
pub fn contains_sql_keyword(text: &str) -> bool {
    SQL_KEYWORD.is_match(text)
}

/// Returns true if `text` contains a tag-shaped fragment.
pub fn contains_markup(text: &str) -> bool {
    MARKUP_TAG.is_match(text)
}

/// Cleans free text.
///
/// Empty input and input containing a denylisted keyword produce an empty
/// string. Otherwise tag-shaped fragments are removed until none remain,
/// non-breaking spaces are removed and the result is trimmed. The keyword
/// check is repeated on the cleaned text, so a keyword split by a tag is
/// caught too. The function is idempotent.
///
/// # Examples
///
/// ```
/// use toolbox_validator::sanitize::sanitize;
///
/// assert_eq!(sanitize("  <b>Olá</b>\u{a0}mundo "), "Olámundo");
/// assert_eq!(sanitize("1; DROP TABLE x; select 1"), "");
/// assert_eq!(sanitize(""), "");
/// ```
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if contains_sql_keyword(text) {
        debug!("text dropped: contains a denylisted keyword");
        return String::new();
    }

    let mut cleaned = text.to_owned();
    while contains_markup(&cleaned) {
        cleaned = MARKUP_TAG.replace_all(&cleaned, "").into_owned();
    }

    let cleaned: String = cleaned.chars().filter(|&c| c != NO_BREAK_SPACE).collect();
    let cleaned = cleaned.trim();

    if contains_sql_keyword(cleaned) {
        debug!("text dropped: markup removal exposed a denylisted keyword");
        return String::new();
    }

    cleaned.to_owned()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  João da Silva \n"), "João da Silva");
    }

    #[test]
    fn test_removes_tags() {
        assert_eq!(sanitize("<p>Hello <i>world</i></p>"), "Hello world");
        assert_eq!(sanitize("<script>alert(1)</script>"), "alert(1)");
    }

    #[test]
    fn test_removes_tags_exposed_by_removal() {
        // The first pass leaves "<b>" behind.
        assert_eq!(sanitize("<<a>b>text"), "text");
    }

    #[test]
    fn test_removes_non_breaking_space() {
        assert_eq!(sanitize("R$\u{a0}10"), "R$10");
        assert_eq!(sanitize("\u{a0}\u{a0}"), "");
    }

    #[test]
    fn test_lone_angle_brackets_survive() {
        assert_eq!(sanitize("1 < 2"), "1 < 2");
        assert_eq!(sanitize("a > b"), "a > b");
    }

    #[test]
    fn test_keyword_denylist_is_case_insensitive() {
        for keyword in SQL_KEYWORDS {
            assert_eq!(sanitize(keyword), "");
            assert_eq!(sanitize(&keyword.to_lowercase()), "");
        }
    }

    #[test]
    fn test_keyword_denylist_is_a_substring_heuristic() {
        // Ordinary words are dropped as well: this is a heuristic, not a parser.
        assert_eq!(sanitize("Created by Maria"), "");
        assert_eq!(sanitize("last updated yesterday"), "");
        assert!(contains_sql_keyword("reselect"));
    }

    #[test]
    fn test_keyword_split_by_tag_is_dropped() {
        assert_eq!(sanitize("SEL<b>ECT * FROM users"), "");
    }

    #[test]
    fn test_idempotent_on_samples() {
        for sample in ["<<a>b>c", " x\u{a0}y ", "<i> </i> z", "plain", "SEL<x>ECT"] {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
