//! Boolean flag validator

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{ErrorCode, FieldOptions, FieldSpec, ValidationError};

/// Checkbox-style flags.
///
/// `true` and `on` read as `true`; `false`, `off`, empty and absent read as
/// `false`, ignoring case. Anything else fails with [`ErrorCode::Invalid`],
/// or yields `Ok(None)` in silent mode. Emptiness is a valid `false`, so the
/// required flag has no effect here.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let terms = Boolean::new().label("Termos");
/// assert_eq!(terms.validate(Some("On")).unwrap(), Some(true));
/// assert_eq!(terms.validate(None).unwrap(), Some(false));
/// assert_eq!(terms.validate(Some("maybe")).unwrap_err().message, "Termos inválido(a)");
///
/// assert_eq!(Boolean::new().silent().validate(Some("maybe")).unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Boolean {
    /// Label and catalog.
    #[serde(flatten)]
    pub spec: FieldSpec,

    /// Whether unrecognized input yields no value instead of failing.
    pub silent: bool,
}

impl Boolean {
    /// A failing, unlabeled flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swallows unrecognized input.
    #[must_use = "builder methods must be chained or built"]
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Reads a flag.
    pub fn validate(&self, input: Option<&str>) -> Result<Option<bool>, ValidationError> {
        let outcome = match input {
            None => Ok(Some(false)),
            Some(raw) if ["true", "on"].iter().any(|v| raw.eq_ignore_ascii_case(v)) => {
                Ok(Some(true))
            }
            Some(raw) if ["false", "off", ""].iter().any(|v| raw.eq_ignore_ascii_case(v)) => {
                Ok(Some(false))
            }
            Some(_) if self.silent => {
                debug!(field = %self.spec.label(), "unrecognized flag ignored");
                Ok(None)
            }
            Some(_) => Err(self.spec.context().fail(ErrorCode::Invalid)),
        };

        self.spec.log_outcome(&outcome);
        outcome
    }
}

impl FieldOptions for Boolean {
    fn spec_mut(&mut self) -> &mut FieldSpec {
        &mut self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("true"), Some(true))]
    #[case(Some("TRUE"), Some(true))]
    #[case(Some("On"), Some(true))]
    #[case(Some("false"), Some(false))]
    #[case(Some("off"), Some(false))]
    #[case(Some(""), Some(false))]
    #[case(None, Some(false))]
    fn test_recognized(#[case] input: Option<&str>, #[case] expected: Option<bool>) {
        assert_eq!(Boolean::new().validate(input).unwrap(), expected);
        assert_eq!(Boolean::new().silent().validate(input).unwrap(), expected);
    }

    #[rstest]
    #[case("maybe")]
    #[case("1")]
    #[case(" true")]
    #[case("yes")]
    fn test_unrecognized(#[case] input: &str) {
        let err = Boolean::new().label("Ativo").validate(Some(input)).unwrap_err();
        assert_eq!(err.code, ErrorCode::Invalid);
        assert_eq!(err.message, "Ativo inválido(a)");

        assert_eq!(Boolean::new().silent().validate(Some(input)).unwrap(), None);
    }

    #[test]
    fn test_required_has_no_effect() {
        assert_eq!(Boolean::new().required().validate(None).unwrap(), Some(false));
    }

    #[test]
    fn test_deserializes() {
        let flag: Boolean = serde_json::from_str(r#"{"label": "Ativo", "silent": true}"#).unwrap();
        assert!(flag.silent);
        assert_eq!(flag.spec.label(), "Ativo");
    }
}
