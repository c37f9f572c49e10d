//! Choice validator
//!
//! A choice is checked against, in order of preference:
//!
//! 1. an explicit list of `(key, label)` options;
//! 2. a [`ChoiceSource`] that looks records up by key;
//! 3. nothing, in which case the input passes through.

use std::convert::Infallible;
use std::fmt::Display;

use crate::foundation::{ErrorCode, FieldOptions, FieldSpec, ValidationError};

// ============================================================================
// SOURCE
// ============================================================================

/// Record lookup by primary key.
pub trait ChoiceSource {
    /// The looked-up record.
    type Record;

    /// Returns the record with `key`, if any.
    fn get(&self, key: &str) -> Option<Self::Record>;

    /// Returns every record whose key is in `keys`.
    fn filter(&self, keys: &[&str]) -> Vec<Self::Record>;
}

/// Placeholder for a choice without a lookup source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSource;

impl ChoiceSource for NoSource {
    type Record = Infallible;

    fn get(&self, _key: &str) -> Option<Infallible> {
        None
    }

    fn filter(&self, _keys: &[&str]) -> Vec<Infallible> {
        Vec::new()
    }
}

// ============================================================================
// INPUT / OUTPUT
// ============================================================================

/// A single selection or a multi-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceInput<'a> {
    /// One key.
    One(&'a str),
    /// Several keys.
    Many(&'a [&'a str]),
}

impl ChoiceInput<'_> {
    /// True for an empty key or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ChoiceInput::One(key) => key.is_empty(),
            ChoiceInput::Many(keys) => keys.is_empty(),
        }
    }
}

impl<'a> From<&'a str> for ChoiceInput<'a> {
    fn from(key: &'a str) -> Self {
        ChoiceInput::One(key)
    }
}

impl<'a> From<&'a [&'a str]> for ChoiceInput<'a> {
    fn from(keys: &'a [&'a str]) -> Self {
        ChoiceInput::Many(keys)
    }
}

/// An accepted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chosen<R> {
    /// The key, as given.
    Key(String),
    /// The keys, as given.
    Keys(Vec<String>),
    /// The record found for a single key.
    Record(R),
    /// The records found for a list of keys.
    Records(Vec<R>),
}

// ============================================================================
// CHOICE
// ============================================================================

/// A selection among options or source records.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let size = Choice::new().options([(1, "Pequeno"), (2, "Grande")]).label("Tamanho");
///
/// assert_eq!(size.validate(Some("2".into())).unwrap(), Some(Chosen::Key("2".into())));
/// assert_eq!(
///     size.validate(Some("3".into())).unwrap_err().message,
///     "Tamanho não é um valor disponível"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Choice<S = NoSource> {
    spec: FieldSpec,
    options: Vec<(String, String)>,
    source: Option<S>,
}

impl Choice {
    /// A pass-through choice with no options and no source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Choice<S> {
    /// Adds one `(key, label)` option. Keys are compared as text.
    #[must_use = "builder methods must be chained or built"]
    pub fn option(mut self, key: impl Display, label: impl Into<String>) -> Self {
        self.options.push((key.to_string(), label.into()));
        self
    }

    /// Adds several `(key, label)` options.
    #[must_use = "builder methods must be chained or built"]
    pub fn options<K, L>(self, options: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Display,
        L: Into<String>,
    {
        options
            .into_iter()
            .fold(self, |choice, (key, label)| choice.option(key, label))
    }

    /// Looks records up in `source` when no options are configured.
    #[must_use = "builder methods must be chained or built"]
    pub fn source<T: ChoiceSource>(self, source: T) -> Choice<T> {
        Choice {
            spec: self.spec,
            options: self.options,
            source: Some(source),
        }
    }

    /// The configured `(key, label)` options.
    #[must_use]
    pub fn option_list(&self) -> &[(String, String)] {
        &self.options
    }
}

impl<S: ChoiceSource> Choice<S> {
    /// Validates a selection.
    pub fn validate(
        &self,
        input: Option<ChoiceInput<'_>>,
    ) -> Result<Option<Chosen<S::Record>>, ValidationError> {
        let outcome = match input {
            None => self.spec.on_empty(),
            Some(selected) if selected.is_empty() => self.spec.on_empty(),
            Some(selected) => self.select(selected).map(Some),
        };

        self.spec.log_outcome(&outcome);
        outcome
    }

    fn select(&self, selected: ChoiceInput<'_>) -> Result<Chosen<S::Record>, ValidationError> {
        let unavailable = || self.spec.context().fail(ErrorCode::Unavailable);

        if !self.options.is_empty() {
            return match selected {
                ChoiceInput::One(key) if self.options.iter().any(|(k, _)| k == key) => {
                    Ok(Chosen::Key(key.to_owned()))
                }
                _ => Err(unavailable()),
            };
        }

        let Some(source) = &self.source else {
            return Ok(match selected {
                ChoiceInput::One(key) => Chosen::Key(key.to_owned()),
                ChoiceInput::Many(keys) => {
                    Chosen::Keys(keys.iter().map(|k| (*k).to_owned()).collect())
                }
            });
        };

        match selected {
            ChoiceInput::One(key) => source.get(key).map(Chosen::Record).ok_or_else(unavailable),
            ChoiceInput::Many(keys) => {
                let records = source.filter(keys);
                if records.is_empty() {
                    Err(unavailable())
                } else {
                    Ok(Chosen::Records(records))
                }
            }
        }
    }
}

impl<S> FieldOptions for Choice<S> {
    fn spec_mut(&mut self) -> &mut FieldSpec {
        &mut self.spec
    }
}

// ============================================================================
// TESTS
// ============================================================================
