//! URL validator

use serde::{Deserialize, Serialize};
use url::{Host, Url};

use super::text::TextRule;
use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};

/// Syntax check for an absolute URL.
pub trait UrlSyntax {
    /// Returns true if `text` is an acceptable URL.
    fn is_valid(&self, text: &str) -> bool;
}

/// Web and FTP URLs with a real-looking host.
///
/// The text must parse with [`url::Url`], contain no whitespace, use one of
/// the `http`, `https`, `ftp` or `ftps` schemes and name a host that is an
/// IP address, `localhost` or a domain with at least one dot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebUrl;

impl WebUrl {
    /// Accepted schemes.
    pub const SCHEMES: [&'static str; 4] = ["http", "https", "ftp", "ftps"];
}

impl UrlSyntax for WebUrl {
    fn is_valid(&self, text: &str) -> bool {
        if text.chars().any(char::is_whitespace) {
            return false;
        }

        let Ok(url) = Url::parse(text) else {
            return false;
        };

        if !Self::SCHEMES.contains(&url.scheme()) {
            return false;
        }

        match url.host() {
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
            Some(Host::Domain(domain)) => {
                domain == "localhost"
                    || (domain.contains('.') && domain.split('.').all(|label| !label.is_empty()))
            }
            None => false,
        }
    }
}

/// URLs, sanitized like text, with an optional required substring.
///
/// Every failure, including one raised by the text checks, is reported as
/// [`ErrorCode::Invalid`] with the URL's label. A text failure is attached as
/// a nested error.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let site = Field::new(UrlRule::new().contains("example")).label("Site");
/// assert!(site.validate(Some("https://www.example.com/about")).is_ok());
///
/// let err = site.validate(Some("https://other.org")).unwrap_err();
/// assert_eq!(err.message, "Site inválido(a)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "S: Default"))]
pub struct UrlRule<S = WebUrl> {
    /// Maximum length in characters after sanitizing; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Substring the URL must contain, compared ignoring case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,

    #[serde(skip)]
    syntax: S,
}

impl UrlRule {
    /// Uses [`WebUrl`] with no length cap.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_syntax(WebUrl)
    }
}

impl<S> UrlRule<S> {
    /// Uses a custom syntax check.
    #[must_use]
    pub const fn with_syntax(syntax: S) -> Self {
        Self {
            max_length: None,
            contains: None,
            syntax,
        }
    }

    /// Caps the sanitized length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Requires `needle` somewhere in the URL, ignoring case.
    #[must_use = "builder methods must be chained or built"]
    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    fn text_rule(&self) -> TextRule {
        TextRule {
            max_length: self.max_length,
            digits_only: false,
        }
    }
}

impl<S: UrlSyntax> FieldRule for UrlRule<S> {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        let text = self
            .text_rule()
            .check(input, ctx)
            .map_err(|cause| ctx.fail(ErrorCode::Invalid).with_nested_error(cause))?;

        if !self.syntax.is_valid(&text) {
            return Err(ctx.fail(ErrorCode::Invalid));
        }

        if let Some(needle) = &self.contains
            && !text.to_lowercase().contains(&needle.to_lowercase())
        {
            return Err(ctx.fail(ErrorCode::Invalid).with_param("contains", needle.clone()));
        }

        Ok(text)
    }
}

/// A URL field.
pub type UrlField<S = WebUrl> = Field<UrlRule<S>>;

// ============================================================================
// TESTS
// ============================================================================
