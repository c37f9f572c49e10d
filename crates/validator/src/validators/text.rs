//! Free-text and markup validators

use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};
use crate::sanitize::sanitize;

// ============================================================================
// TEXT
// ============================================================================

/// Sanitized free text with an optional length cap.
///
/// Steps after the required check: sanitize, reject text the sanitizer
/// reduced to nothing, cap the length in characters and optionally demand
/// ASCII digits only. The accepted value is the sanitized text.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let name = Field::new(TextRule::new().max_length(10)).label("Nome");
/// assert_eq!(name.validate(Some(" <b>Ana</b> ")).unwrap(), Some("Ana".to_string()));
///
/// let err = name.validate(Some("Ana Maria da Silva")).unwrap_err();
/// assert_eq!(err.message, "Nome acima de 10 caracteres");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRule {
    /// Maximum length in characters; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Whether the sanitized text must be made of ASCII digits only.
    pub digits_only: bool,
}

impl TextRule {
    /// Unlimited text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: None,
            digits_only: false,
        }
    }

    /// Caps the sanitized length.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Requires ASCII digits only.
    #[must_use = "builder methods must be chained or built"]
    pub const fn digits_only(mut self) -> Self {
        self.digits_only = true;
        self
    }
}

impl FieldRule for TextRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        let value = sanitize(input);
        if value.is_empty() {
            return Err(ctx.fail(ErrorCode::InvalidCharacters));
        }

        if let Some(max_length) = self.max_length
            && value.chars().count() > max_length
        {
            return Err(ctx.fail_with(
                ErrorCode::MaxLength,
                &[("max_length", max_length.to_string())],
            ));
        }

        if self.digits_only && !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ctx.fail(ErrorCode::DigitsOnly));
        }

        Ok(value)
    }
}

/// A text field.
pub type TextField = Field<TextRule>;

// ============================================================================
// HTML
// ============================================================================

/// Markup kept as written: only the required check applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlRule;

impl FieldRule for HtmlRule {
    type Output = String;

    fn check(&self, input: &str, _ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        Ok(input.to_owned())
    }
}

/// A markup field.
pub type HtmlField = Field<HtmlRule>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FieldOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_accepts_and_sanitizes() {
        let field = Field::new(TextRule::new());
        assert_eq!(
            field.validate(Some("  <p>Rua A</p>\u{a0}")).unwrap(),
            Some("Rua A".to_owned())
        );
    }

    #[test]
    fn test_sanitized_to_empty_is_invalid_characters() {
        let field = Field::new(TextRule::new()).label("Obs");
        for input in ["<br>", "select 1", "   "] {
            let err = field.validate(Some(input)).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCharacters);
            assert_eq!(err.message, "Obs apresenta caracteres inválidos");
        }
    }

    #[test]
    fn test_max_length_counts_characters() {
        let field = Field::new(TextRule::new().max_length(4));
        assert_eq!(field.validate(Some("ação")).unwrap(), Some("ação".to_owned()));

        let err = field.validate(Some("ações")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MaxLength);
        assert_eq!(err.param("max_length"), Some("4"));
    }

    #[rstest]
    #[case("x<<a>b>", "x")]
    #[case("<<script>script>alert(1)", "alert(1)")]
    fn test_nested_tags_are_removed_not_rejected(#[case] input: &str, #[case] expected: &str) {
        let field = Field::new(TextRule::new()).label("Obs");
        assert_eq!(field.validate(Some(input)).unwrap(), Some(expected.to_owned()));
    }

    #[test]
    fn test_length_is_checked_after_sanitizing() {
        let field = Field::new(TextRule::new().max_length(3));
        assert!(field.validate(Some("<strong>abc</strong>")).is_ok());
    }

    #[rstest]
    #[case("12345", true)]
    #[case("12a45", false)]
    #[case("12 45", false)]
    #[case("١٢", false)]
    fn test_digits_only(#[case] input: &str, #[case] accepted: bool) {
        let field = Field::new(TextRule::new().digits_only()).label("CEP");
        let outcome = field.validate(Some(input));
        assert_eq!(outcome.is_ok(), accepted, "{input:?}");
        if let Err(err) = outcome {
            assert_eq!(err.message, "CEP deve conter apenas digitos.");
        }
    }

    #[test]
    fn test_rule_deserializes_with_defaults() {
        let field: TextField =
            serde_json::from_str(r#"{"required": true, "label": "Nome", "max_length": 5}"#)
                .unwrap();
        assert!(field.spec.required);
        assert_eq!(field.rule, TextRule::new().max_length(5));
    }

    #[test]
    fn test_html_keeps_markup() {
        let field = Field::new(HtmlRule).required();
        assert_eq!(
            field.validate(Some("<p>SELECT</p>")).unwrap(),
            Some("<p>SELECT</p>".to_owned())
        );
        assert_eq!(field.validate(None).unwrap_err().code, ErrorCode::Required);
    }
}
