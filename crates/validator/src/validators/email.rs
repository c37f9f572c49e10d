//! E-mail address validator

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};

// Lowercase local part of dot-separated atoms, lowercase dotted domain.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("e-mail pattern is a valid regex")
});

/// Conservative e-mail addresses.
///
/// Rejects more than one `@` and any whitespace, then caps the length, then
/// matches the whole address against a lowercase grammar. Uppercase
/// addresses are rejected; lowercase them before validating if that is not
/// wanted.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let email = Field::new(EmailRule::new().max_length(50)).label("E-mail");
/// assert!(email.validate(Some("user@example.com")).is_ok());
/// assert_eq!(email.validate(Some("a@b@c.com")).unwrap_err().message, "E-mail inválido(a)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRule {
    /// Maximum length in characters; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl EmailRule {
    /// Unlimited length.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Caps the address length.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl FieldRule for EmailRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        if input.matches('@').count() > 1 || input.chars().any(char::is_whitespace) {
            return Err(ctx.fail(ErrorCode::Invalid));
        }

        if let Some(max_length) = self.max_length
            && input.chars().count() > max_length
        {
            return Err(ctx.fail_with(
                ErrorCode::MaxLength,
                &[("max_length", max_length.to_string())],
            ));
        }

        if !EMAIL.is_match(input) {
            return Err(ctx.fail(ErrorCode::Invalid));
        }

        Ok(input.to_owned())
    }
}

/// An e-mail field.
pub type EmailField = Field<EmailRule>;
