//! Field wrapper shared by every validator kind
//!
//! A [`Field`] pairs a constraint set (a [`FieldRule`]) with the field's
//! required flag and label. It owns the contract every kind shares:
//!
//! - empty or absent input with `required = false` is accepted as `Ok(None)`
//!   and no rule runs;
//! - empty or absent input with `required = true` fails with
//!   [`ErrorCode::Required`] before any rule runs;
//! - otherwise the rule's checks run and stop at the first failure.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{ErrorCode, ValidationError};
use super::messages::MessageCatalog;

/// Label used in messages when a field has none.
pub const DEFAULT_LABEL: &str = "Campo";

// ============================================================================
// FIELD SPEC
// ============================================================================

/// Required flag, label and message catalog of a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Whether emptiness is itself a failure.
    pub required: bool,

    /// Human-readable label used in messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Cow<'static, str>>,

    /// Catalog overriding the process default.
    #[serde(skip)]
    pub messages: Option<Arc<MessageCatalog>>,
}

impl FieldSpec {
    /// Returns the label, or [`DEFAULT_LABEL`].
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    /// Returns the context rules use to build failures.
    pub fn context(&self) -> FieldContext<'_> {
        FieldContext::new(
            self.label(),
            self.messages
                .as_deref()
                .unwrap_or_else(|| MessageCatalog::global()),
        )
    }

    /// Outcome for an input already known to be empty.
    pub fn on_empty<T>(&self) -> Result<Option<T>, ValidationError> {
        if self.required {
            Err(self.context().fail(ErrorCode::Required))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn log_outcome<T>(&self, outcome: &Result<T, ValidationError>) {
        match outcome {
            Ok(_) => trace!(field = %self.label(), "field accepted"),
            Err(error) => debug!(
                field = %self.label(),
                code = %error.code,
                "field rejected"
            ),
        }
    }
}

// ============================================================================
// FIELD CONTEXT
// ============================================================================

/// What a rule needs to report a failure: the label and the templates.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    label: &'a str,
    messages: &'a MessageCatalog,
}

impl<'a> FieldContext<'a> {
    /// Creates a context from a label and a catalog.
    pub fn new(label: &'a str, messages: &'a MessageCatalog) -> Self {
        Self { label, messages }
    }

    /// The field label.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Builds a failure with no template params.
    pub fn fail(&self, code: ErrorCode) -> ValidationError {
        self.fail_with(code, &[])
    }

    /// Builds a failure whose message is rendered with `params`.
    pub fn fail_with(&self, code: ErrorCode, params: &[(&'static str, String)]) -> ValidationError {
        let refs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let message = self.messages.render(code, self.label, &refs);

        params.iter().fold(
            ValidationError::new(code, message).with_field(self.label.to_owned()),
            |error, (key, value)| error.with_param(*key, value.clone()),
        )
    }
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// The kind-specific part of a validator.
///
/// `check` only ever sees non-empty input: [`Field::validate`] settles the
/// required policy first.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// struct Uppercase;
///
/// impl FieldRule for Uppercase {
///     type Output = String;
///
///     fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
///         if input.chars().all(|c| !c.is_lowercase()) {
///             Ok(input.to_owned())
///         } else {
///             Err(ctx.fail(ErrorCode::Invalid))
///         }
///     }
/// }
///
/// let field = Field::new(Uppercase).label("Sigla");
/// assert!(field.validate(Some("SP")).is_ok());
/// assert_eq!(field.validate(Some("sp")).unwrap_err().message, "Sigla inválido(a)");
/// ```
pub trait FieldRule {
    /// The accepted, possibly normalized, value.
    type Output;

    /// Rewrites raw input before the emptiness check. Most rules keep it.
    fn prepare<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }

    /// Runs the kind-specific checks in order, stopping at the first failure.
    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<Self::Output, ValidationError>;
}

// ============================================================================
// FIELD
// ============================================================================

/// A rule bound to a required flag and a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field<R> {
    /// Required flag, label and catalog.
    #[serde(flatten)]
    pub spec: FieldSpec,

    /// Kind-specific constraints.
    #[serde(flatten)]
    pub rule: R,
}

impl<R> Field<R> {
    /// Wraps a rule as an optional, unlabeled field.
    pub fn new(rule: R) -> Self {
        Self {
            spec: FieldSpec::default(),
            rule,
        }
    }
}

impl<R: FieldRule> Field<R> {
    /// Validates one input.
    ///
    /// Returns `Ok(None)` for accepted emptiness, `Ok(Some(value))` for an
    /// accepted value and `Err` for the first violated constraint.
    pub fn validate(&self, input: Option<&str>) -> Result<Option<R::Output>, ValidationError> {
        let prepared = input.map(|raw| self.rule.prepare(raw));

        let outcome = match prepared.as_deref() {
            None | Some("") => self.spec.on_empty(),
            Some(value) => self.rule.check(value, &self.spec.context()).map(Some),
        };

        self.spec.log_outcome(&outcome);
        outcome
    }
}

// ============================================================================
// FIELD OPTIONS
// ============================================================================

/// Builder methods shared by every field type.
pub trait FieldOptions: Sized {
    /// Mutable access to the field's spec.
    fn spec_mut(&mut self) -> &mut FieldSpec;

    /// Marks the field as required.
    #[must_use = "builder methods must be chained or built"]
    fn required(self) -> Self {
        self.required_if(true)
    }

    /// Sets the required flag.
    #[must_use = "builder methods must be chained or built"]
    fn required_if(mut self, required: bool) -> Self {
        self.spec_mut().required = required;
        self
    }

    /// Sets the label used in messages.
    #[must_use = "builder methods must be chained or built"]
    fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.spec_mut().label = Some(label.into());
        self
    }

    /// Renders messages from `catalog` instead of the process default.
    #[must_use = "builder methods must be chained or built"]
    fn messages(mut self, catalog: Arc<MessageCatalog>) -> Self {
        self.spec_mut().messages = Some(catalog);
        self
    }
}

impl<R> FieldOptions for Field<R> {
    fn spec_mut(&mut self) -> &mut FieldSpec {
        &mut self.spec
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl FieldRule for Echo {
        type Output = String;

        fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
            if input == "bad" {
                Err(ctx.fail_with(ErrorCode::MaxLength, &[("max_length", "2".to_owned())]))
            } else {
                Ok(input.to_owned())
            }
        }
    }

    struct Trimmed;

    impl FieldRule for Trimmed {
        type Output = String;

        fn prepare<'a>(&self, raw: &'a str) -> Cow<'a, str> {
            Cow::Borrowed(raw.trim())
        }

        fn check(&self, input: &str, _ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
            Ok(input.to_owned())
        }
    }

    #[test]
    fn test_optional_empty_is_accepted_without_running_rule() {
        let field = Field::new(Echo);
        assert_eq!(field.validate(None).unwrap(), None);
        assert_eq!(field.validate(Some("")).unwrap(), None);
    }

    #[test]
    fn test_required_empty_fails_first() {
        let field = Field::new(Echo).required().label("Nome");
        let error = field.validate(Some("")).unwrap_err();
        assert_eq!(error.code, ErrorCode::Required);
        assert_eq!(error.message, "Nome obrigatório(a)");
        assert_eq!(error.field.as_deref(), Some("Nome"));
        assert_eq!(field.validate(None).unwrap_err().code, ErrorCode::Required);
    }

    #[test]
    fn test_rule_failure_carries_label_and_params() {
        let error = Field::new(Echo).label("Sigla").validate(Some("bad")).unwrap_err();
        assert_eq!(error.message, "Sigla acima de 2 caracteres");
        assert_eq!(error.param("max_length"), Some("2"));
    }

    #[test]
    fn test_default_label() {
        let error = Field::new(Echo).required().validate(None).unwrap_err();
        assert_eq!(error.message, "Campo obrigatório(a)");
    }

    #[test]
    fn test_prepare_runs_before_emptiness_check() {
        let field = Field::new(Trimmed).required();
        assert_eq!(field.validate(Some("   ")).unwrap_err().code, ErrorCode::Required);
        assert_eq!(field.validate(Some(" x ")).unwrap(), Some("x".to_owned()));
    }

    #[test]
    fn test_custom_catalog() {
        let field = Field::new(Echo)
            .required()
            .label("Name")
            .messages(Arc::new(MessageCatalog::english()));
        assert_eq!(field.validate(None).unwrap_err().message, "Name is required");
    }

    #[test]
    fn test_required_if() {
        assert!(Field::new(Echo).required_if(false).validate(None).is_ok());
        assert!(Field::new(Echo).required_if(true).validate(None).is_err());
    }
}
