//! Brazilian area code (DDD) and phone number validators
//!
//! Both take bare digits: formatting such as `(11) 9 8765-4321` is rejected,
//! not stripped.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};

static AREA_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2,3}$").expect("area code pattern is a valid regex"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,9}$").expect("phone pattern is a valid regex"));

fn check_digits(
    input: &str,
    max_length: Option<usize>,
    pattern: &Regex,
    ctx: &FieldContext<'_>,
) -> Result<String, ValidationError> {
    if let Some(max_length) = max_length
        && input.chars().count() > max_length
    {
        return Err(ctx.fail_with(
            ErrorCode::MaxDigits,
            &[("max_length", max_length.to_string())],
        ));
    }

    if !pattern.is_match(input) {
        return Err(ctx.fail(ErrorCode::Invalid));
    }

    Ok(input.to_owned())
}

// ============================================================================
// AREA CODE
// ============================================================================

/// Two or three digit area codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaCodeRule {
    /// Maximum length; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl AreaCodeRule {
    /// No extra length cap.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Caps the length before the pattern is checked.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl FieldRule for AreaCodeRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        check_digits(input, self.max_length, &AREA_CODE, ctx)
    }
}

/// An area code field.
pub type AreaCodeField = Field<AreaCodeRule>;

// ============================================================================
// PHONE
// ============================================================================

/// Eight or nine digit local phone numbers.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let phone = Field::new(PhoneRule::new().max_length(9)).label("Telefone");
/// assert!(phone.validate(Some("987654321")).is_ok());
/// assert_eq!(
///     phone.validate(Some("9876-5432")).unwrap_err().message,
///     "Telefone inválido(a)"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRule {
    /// Maximum length; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl PhoneRule {
    /// No extra length cap.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Caps the length before the pattern is checked.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl FieldRule for PhoneRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        check_digits(input, self.max_length, &PHONE, ctx)
    }
}

/// A phone field.
pub type PhoneField = Field<PhoneRule>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FieldOptions;
    use rstest::rstest;

    #[rstest]
    #[case("11", true)]
    #[case("021", true)]
    #[case("1", false)]
    #[case("1234", false)]
    #[case("1a", false)]
    fn test_area_code_pattern(#[case] input: &str, #[case] accepted: bool) {
        let outcome = Field::new(AreaCodeRule::new()).validate(Some(input));
        assert_eq!(outcome.is_ok(), accepted, "{input:?}");
    }

    #[test]
    fn test_area_code_length_before_pattern() {
        let err = Field::new(AreaCodeRule::new().max_length(2))
            .label("DDD")
            .validate(Some("0xx"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MaxDigits);
        assert_eq!(err.message, "DDD acima de 2 dígitos");
    }

    #[rstest]
    #[case("87654321", true)]
    #[case("987654321", true)]
    #[case("7654321", false)]
    #[case("9876543210", false)]
    #[case("9876 5432", false)]
    fn test_phone_pattern(#[case] input: &str, #[case] accepted: bool) {
        let outcome = Field::new(PhoneRule::new()).validate(Some(input));
        assert_eq!(outcome.is_ok(), accepted, "{input:?}");
    }

    #[test]
    fn test_phone_failures() {
        let field = Field::new(PhoneRule::new().max_length(8)).label("Celular");
        assert_eq!(
            field.validate(Some("987654321")).unwrap_err().code,
            ErrorCode::MaxDigits
        );
        assert_eq!(field.validate(Some("")).unwrap(), None);
        assert_eq!(
            field.required().validate(None).unwrap_err().message,
            "Celular obrigatório(a)"
        );
    }
}
