//! Message templates for validation failures
//!
//! Every [`ErrorCode`] maps to a template. Templates use `{label}` for the
//! field label and `{name}` placeholders for the constraint values a failure
//! carries (`{max_length}`, `{minimum}`, `{above}`, `{maximum}`, `{below}`,
//! `{max_digits}`, `{decimal_places}`).

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::ErrorCode;

static DEFAULT_CATALOG: LazyLock<MessageCatalog> = LazyLock::new(MessageCatalog::portuguese);

/// Errors raised while building a message catalog from configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The catalog document could not be parsed.
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A template was configured as an empty string.
    #[error("message template for `{code}` is empty")]
    EmptyTemplate {
        /// Code whose template was empty.
        code: ErrorCode,
    },
}

/// Templates used to render failure messages.
///
/// # Examples
///
/// ```
/// use toolbox_validator::foundation::{ErrorCode, MessageCatalog};
///
/// let catalog = MessageCatalog::from_json(r#"{"required": "{label} is required"}"#).unwrap();
/// assert_eq!(catalog.render(ErrorCode::Required, "Name", &[]), "Name is required");
///
/// // Codes missing from the document keep their default template.
/// assert_eq!(catalog.render(ErrorCode::Invalid, "Nome", &[]), "Nome inválido(a)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: HashMap<ErrorCode, String>,
}

impl MessageCatalog {
    /// Returns the process-wide default catalog (Portuguese).
    pub fn global() -> &'static MessageCatalog {
        &DEFAULT_CATALOG
    }

    /// The default Portuguese messages.
    #[must_use]
    pub fn portuguese() -> Self {
        Self::from_pairs([
            (ErrorCode::Required, "{label} obrigatório(a)"),
            (
                ErrorCode::InvalidCharacters,
                "{label} apresenta caracteres inválidos",
            ),
            (
                ErrorCode::MaxLength,
                "{label} acima de {max_length} caracteres",
            ),
            (
                ErrorCode::DigitsOnly,
                "{label} deve conter apenas digitos.",
            ),
            (
                ErrorCode::MaxDigits,
                "{label} acima de {max_length} dígitos",
            ),
            (
                ErrorCode::Minimum,
                "{label} deve ser pelo menos {minimum}",
            ),
            (ErrorCode::Above, "{label} deve ser maior que {above}"),
            (ErrorCode::Maximum, "{label} deve ser até {maximum}"),
            (ErrorCode::Below, "{label} deve ser abaixo de {below}"),
            (ErrorCode::Invalid, "{label} inválido(a)"),
            (
                ErrorCode::IntegerDigits,
                "{label} acima de {max_digits} dígitos para inteiro",
            ),
            (
                ErrorCode::DecimalPlaces,
                "{label} acima de {decimal_places} dígitos para decimal",
            ),
            (
                ErrorCode::Unavailable,
                "{label} não é um valor disponível",
            ),
        ])
    }

    /// English messages.
    #[must_use]
    pub fn english() -> Self {
        Self::from_pairs([
            (ErrorCode::Required, "{label} is required"),
            (
                ErrorCode::InvalidCharacters,
                "{label} contains invalid characters",
            ),
            (
                ErrorCode::MaxLength,
                "{label} is longer than {max_length} characters",
            ),
            (ErrorCode::DigitsOnly, "{label} must contain only digits"),
            (
                ErrorCode::MaxDigits,
                "{label} has more than {max_length} digits",
            ),
            (ErrorCode::Minimum, "{label} must be at least {minimum}"),
            (ErrorCode::Above, "{label} must be greater than {above}"),
            (ErrorCode::Maximum, "{label} must be at most {maximum}"),
            (ErrorCode::Below, "{label} must be below {below}"),
            (ErrorCode::Invalid, "{label} is invalid"),
            (
                ErrorCode::IntegerDigits,
                "{label} has more than {max_digits} integer digits",
            ),
            (
                ErrorCode::DecimalPlaces,
                "{label} has more than {decimal_places} decimal places",
            ),
            (
                ErrorCode::Unavailable,
                "{label} is not an available option",
            ),
        ])
    }

    fn from_pairs<const N: usize>(pairs: [(ErrorCode, &str); N]) -> Self {
        Self {
            templates: pairs
                .into_iter()
                .map(|(code, template)| (code, template.to_owned()))
                .collect(),
        }
    }

    /// Parses a JSON object of `code -> template` overrides on top of the
    /// Portuguese defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: HashMap<ErrorCode, String> = serde_json::from_str(json)?;
        let mut catalog = Self::portuguese();
        for (code, template) in overrides {
            catalog.set(code, template)?;
        }
        Ok(catalog)
    }

    /// Replaces the template for one code.
    pub fn set(&mut self, code: ErrorCode, template: impl Into<String>) -> Result<(), ConfigError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(ConfigError::EmptyTemplate { code });
        }
        self.templates.insert(code, template);
        Ok(())
    }

    /// Returns the raw template for a code.
    #[must_use]
    pub fn template(&self, code: ErrorCode) -> &str {
        self.templates
            .get(&code)
            .or_else(|| DEFAULT_CATALOG.templates.get(&code))
            .map_or("{label}", String::as_str)
    }

    /// Renders the template for `code` with the label and params substituted.
    ///
    /// Placeholders without a matching param are left as written.
    #[must_use]
    pub fn render(&self, code: ErrorCode, label: &str, params: &[(&str, &str)]) -> String {
        let mut message = self.template(code).to_owned();
        for (key, value) in params {
            message = message.replace(&format!("{{{key}}}"), value);
        }
        message.replace("{label}", label)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::portuguese()
    }
}

// ============================================================================
// TESTS
// ============================================================================
