//! Integer and decimal validators
//!
//! Both kinds share [`Bounds`]: an inclusive `minimum`, an exclusive
//! `above`, and the `maximum`/`below` pair whose direction is chosen by
//! [`BoundMode`].

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};

/// Digit cap used when none (or zero) is configured.
pub const DEFAULT_MAX_DIGITS: usize = 10;

/// Fraction digit cap used when none (or zero) is configured.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

fn or_default(configured: Option<usize>, default: usize) -> usize {
    match configured {
        None | Some(0) => default,
        Some(n) => n,
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

/// How the `maximum` and `below` bounds compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundMode {
    /// Legacy comparisons: `maximum` rejects values *less than* it and
    /// `below` rejects values *less than or equal to* it, mirroring
    /// `minimum` and `above`. Forms written against the legacy behaviour
    /// keep passing.
    #[default]
    Literal,

    /// `maximum` is an inclusive upper bound and `below` an exclusive one.
    Inclusive,
}

/// Optional numeric bounds, checked in the order minimum, above, maximum,
/// below.
///
/// A bound that is set is always enforced, zero included: `above(0)`
/// rejects `0`. Only an unset bound (`None`) is skipped. This differs from
/// forms that treat a zero bound as absent.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let bounds = Bounds::new().minimum(10).maximum(20).mode(BoundMode::Inclusive);
/// let age = Field::new(IntegerRule::new().bounds(bounds)).label("Idade");
///
/// assert!(age.validate(Some("15")).is_ok());
/// assert_eq!(age.validate(Some("21")).unwrap_err().message, "Idade deve ser até 20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds<T> {
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<T>,

    /// Exclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub above: Option<T>,

    /// Upper bound, see [`BoundMode`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<T>,

    /// Exclusive upper bound, see [`BoundMode`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub below: Option<T>,

    /// Direction of `maximum` and `below`.
    pub mode: BoundMode,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            minimum: None,
            above: None,
            maximum: None,
            below: None,
            mode: BoundMode::default(),
        }
    }
}

impl<T> Bounds<T> {
    /// No bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive minimum.
    #[must_use = "builder methods must be chained or built"]
    pub fn minimum(mut self, minimum: T) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the exclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn above(mut self, above: T) -> Self {
        self.above = Some(above);
        self
    }

    /// Sets the maximum.
    #[must_use = "builder methods must be chained or built"]
    pub fn maximum(mut self, maximum: T) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Sets the `below` bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn below(mut self, below: T) -> Self {
        self.below = Some(below);
        self
    }

    /// Sets the comparison mode of `maximum` and `below`.
    #[must_use = "builder methods must be chained or built"]
    pub fn mode(mut self, mode: BoundMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<T: PartialOrd + Display> Bounds<T> {
    /// Checks `value` against every configured bound, in order.
    pub fn check(&self, value: &T, ctx: &FieldContext<'_>) -> Result<(), ValidationError> {
        let fail = |code: ErrorCode, key: &'static str, bound: &T| {
            Err(ctx.fail_with(code, &[(key, bound.to_string())]))
        };

        if let Some(minimum) = &self.minimum
            && value < minimum
        {
            return fail(ErrorCode::Minimum, "minimum", minimum);
        }

        if let Some(above) = &self.above
            && value <= above
        {
            return fail(ErrorCode::Above, "above", above);
        }

        if let Some(maximum) = &self.maximum {
            let violated = match self.mode {
                BoundMode::Literal => value < maximum,
                BoundMode::Inclusive => value > maximum,
            };
            if violated {
                return fail(ErrorCode::Maximum, "maximum", maximum);
            }
        }

        if let Some(below) = &self.below {
            let violated = match self.mode {
                BoundMode::Literal => value <= below,
                BoundMode::Inclusive => value >= below,
            };
            if violated {
                return fail(ErrorCode::Below, "below", below);
            }
        }

        Ok(())
    }
}

// ============================================================================
// INTEGER
// ============================================================================

/// Unsigned digit strings, at most `max_length` digits, within [`Bounds`].
///
/// The accepted value is the input text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerRule {
    /// Digit cap; `None` or zero means [`DEFAULT_MAX_DIGITS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Value bounds.
    #[serde(flatten)]
    pub bounds: Bounds<i64>,
}

impl IntegerRule {
    /// Up to ten digits, unbounded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the digit cap.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the value bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn bounds(mut self, bounds: Bounds<i64>) -> Self {
        self.bounds = bounds;
        self
    }

    /// The digit cap in effect.
    #[must_use]
    pub fn effective_max_length(&self) -> usize {
        or_default(self.max_length, DEFAULT_MAX_DIGITS)
    }
}

impl FieldRule for IntegerRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        let max_length = self.effective_max_length();

        if !input.bytes().all(|b| b.is_ascii_digit()) || input.len() > max_length {
            return Err(ctx.fail_with(
                ErrorCode::MaxDigits,
                &[("max_length", max_length.to_string())],
            ));
        }

        let value: i64 = input.parse().map_err(|_| ctx.fail(ErrorCode::Invalid))?;
        self.bounds.check(&value, ctx)?;

        Ok(input.to_owned())
    }
}

/// An integer field.
pub type IntegerField = Field<IntegerRule>;

// ============================================================================
// DECIMAL
// ============================================================================

/// Decimal numbers written with `.` or `,`, within digit caps and [`Bounds`].
///
/// A comma becomes a dot and `.00` is appended when there is no dot. The
/// accepted value is that normalized text.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let price = Field::new(DecimalRule::new()).label("Preço");
/// assert_eq!(price.validate(Some("10,5")).unwrap(), Some("10.5".to_string()));
/// assert_eq!(price.validate(Some("10")).unwrap(), Some("10.00".to_string()));
/// assert!(price.validate(Some("1.234")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalRule {
    /// Cap on the integer part length, sign included; `None` or zero means
    /// [`DEFAULT_MAX_DIGITS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_digits: Option<usize>,

    /// Cap on the fraction length; `None` or zero means
    /// [`DEFAULT_DECIMAL_PLACES`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<usize>,

    /// Value bounds.
    #[serde(flatten)]
    pub bounds: Bounds<Decimal>,
}

impl DecimalRule {
    /// Ten integer digits and two decimal places, unbounded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integer part cap.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Sets the fraction cap.
    #[must_use = "builder methods must be chained or built"]
    pub fn decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }

    /// Sets the value bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn bounds(mut self, bounds: Bounds<Decimal>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces a decimal comma and pads a missing fraction.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        let mut value = input.replace(',', ".");
        if !value.contains('.') {
            value.push_str(".00");
        }
        value
    }
}

impl FieldRule for DecimalRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        let value = Self::normalize(input);
        let number: Decimal = value.parse().map_err(|_| ctx.fail(ErrorCode::Invalid))?;

        let (integer, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));

        let max_digits = or_default(self.max_digits, DEFAULT_MAX_DIGITS);
        if integer.len() > max_digits {
            return Err(ctx.fail_with(
                ErrorCode::IntegerDigits,
                &[("max_digits", max_digits.to_string())],
            ));
        }

        let decimal_places = or_default(self.decimal_places, DEFAULT_DECIMAL_PLACES);
        if fraction.len() > decimal_places {
            return Err(ctx.fail_with(
                ErrorCode::DecimalPlaces,
                &[("decimal_places", decimal_places.to_string())],
            ));
        }

        self.bounds.check(&number, ctx)?;

        Ok(value)
    }
}

/// A decimal field.
pub type DecimalField = Field<DecimalRule>;

// ============================================================================
// TESTS
// ============================================================================
