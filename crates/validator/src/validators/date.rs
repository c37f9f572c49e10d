//! Date format validators
//!
//! These check the shape of the text only. Calendar validity (February 30th
//! and the like) is left to [`crate::date::parse_storage_date`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::date::to_storage_order;
use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};

// Anchored at the start only: a trailing time component is allowed.
static STORAGE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}[-/](0[1-9]|1[012])[-/](0[1-9]|[12][0-9]|3[01])")
        .expect("storage date pattern is a valid regex")
});

static DISPLAY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-2][0-9]|3[01])/(0[0-9]|1[0-2])/[0-9]{4}$")
        .expect("display date pattern is a valid regex")
});

/// Year-first dates: `YYYY-MM-DD` or `YYYY/MM/DD`, anything may follow.
///
/// The accepted value is the input text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRule;

impl FieldRule for DateRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        if STORAGE_DATE.is_match(input) {
            Ok(input.to_owned())
        } else {
            Err(ctx.fail(ErrorCode::Invalid))
        }
    }
}

/// A year-first date field.
pub type DateField = Field<DateRule>;

/// Day-first dates (`DD/MM/YYYY`), accepted in storage order.
///
/// Day `00` and month `00` pass the shape check.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let birth = Field::new(BrDateRule).label("Nascimento");
/// assert_eq!(birth.validate(Some("25/12/2023")).unwrap(), Some("2023-12-25".to_string()));
/// assert!(birth.validate(Some("2023-12-25")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrDateRule;

impl FieldRule for BrDateRule {
    type Output = String;

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        if DISPLAY_DATE.is_match(input) {
            Ok(to_storage_order(input))
        } else {
            Err(ctx.fail(ErrorCode::Invalid))
        }
    }
}

/// A day-first date field.
pub type BrDateField = Field<BrDateRule>;
