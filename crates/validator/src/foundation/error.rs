//! Error types for validation failures
//!
//! A failure carries a classification ([`ErrorCode`]), the rendered message,
//! the label of the offending field and the constraint values the message
//! was built from. The code and params are kept so a presentation layer can
//! re-render the message with its own templates.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR CODE
// ============================================================================

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// A required field was empty or absent.
    Required,
    /// Text was reduced to nothing by the sanitizer.
    InvalidCharacters,
    /// Text is longer than the allowed number of characters.
    MaxLength,
    /// Text must be made of digits only.
    DigitsOnly,
    /// A numeric or phone field has more digits than allowed.
    MaxDigits,
    /// Value is below the inclusive minimum.
    Minimum,
    /// Value is not strictly above the exclusive lower bound.
    Above,
    /// Value violates the `maximum` bound.
    Maximum,
    /// Value violates the `below` bound.
    Below,
    /// Value does not have the expected format.
    Invalid,
    /// Decimal integer part has too many digits.
    IntegerDigits,
    /// Decimal fractional part has too many digits.
    DecimalPlaces,
    /// Choice is not one of the available values.
    Unavailable,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::Required,
        ErrorCode::InvalidCharacters,
        ErrorCode::MaxLength,
        ErrorCode::DigitsOnly,
        ErrorCode::MaxDigits,
        ErrorCode::Minimum,
        ErrorCode::Above,
        ErrorCode::Maximum,
        ErrorCode::Below,
        ErrorCode::Invalid,
        ErrorCode::IntegerDigits,
        ErrorCode::DecimalPlaces,
        ErrorCode::Unavailable,
    ];

    /// Stable snake_case identifier, the same one used by serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::InvalidCharacters => "invalid_characters",
            ErrorCode::MaxLength => "max_length",
            ErrorCode::DigitsOnly => "digits_only",
            ErrorCode::MaxDigits => "max_digits",
            ErrorCode::Minimum => "minimum",
            ErrorCode::Above => "above",
            ErrorCode::Maximum => "maximum",
            ErrorCode::Below => "below",
            ErrorCode::Invalid => "invalid",
            ErrorCode::IntegerDigits => "integer_digits",
            ErrorCode::DecimalPlaces => "decimal_places",
            ErrorCode::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A classified validation failure for a single field.
///
/// # Examples
///
/// ```
/// use toolbox_validator::foundation::{ErrorCode, ValidationError};
///
/// let error = ValidationError::new(ErrorCode::MaxLength, "Nome acima de 5 caracteres")
///     .with_field("Nome")
///     .with_param("max_length", "5");
///
/// assert_eq!(error.param("max_length"), Some("5"));
/// assert_eq!(error.to_string(), "[Nome] max_length: Nome acima de 5 caracteres");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Failure classification.
    pub code: ErrorCode,

    /// Human-readable message, already rendered from a template.
    pub message: Cow<'static, str>,

    /// Label of the field that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Constraint values used by the message template, in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Failures reported by a delegate check, kept under the caller's error.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field label for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Failures collected across the fields of one form.
///
/// Validators stop at the first failure of a field; this collection is how a
/// caller keeps going across fields and reports them together.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let mut errors = ValidationErrors::new();
/// let name = errors.record(Field::new(TextRule::new()).required().label("Nome").validate(None));
/// let age = errors.record(Field::new(IntegerRule::new()).label("Idade").validate(Some("42")));
///
/// assert_eq!(name, None);
/// assert_eq!(age, Some(Some("42".to_string())));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Keeps the accepted value of a field outcome, or records its failure.
    pub fn record<T>(&mut self, outcome: Result<T, ValidationError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(error);
                None
            }
        }
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error recorded for the given field label.
    #[must_use]
    pub fn for_field(&self, label: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field.as_deref() == Some(label))
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
