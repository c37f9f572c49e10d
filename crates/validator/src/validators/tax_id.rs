//! CPF/CNPJ validator
//!
//! Formatting is stripped before anything else: `529.982.247-25` and
//! `52998224725` are the same input. The check-digit test is a
//! [`TaxIdChecksum`] so callers can swap it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorCode, Field, FieldContext, FieldRule, ValidationError};

/// Check-digit validation for a digits-only tax id.
pub trait TaxIdChecksum {
    /// Returns true if `digits` is a valid id.
    fn is_valid(&self, digits: &str) -> bool;
}

// ============================================================================
// CPF / CNPJ
// ============================================================================

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Mod-11 check digits: CPF for 11 digits, CNPJ for 14.
///
/// Sequences of one repeated digit (`00000000000`, `11111111111111`, ...)
/// satisfy the arithmetic but are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpfCnpj;

impl CpfCnpj {
    /// Validates an individual's id (11 digits).
    #[must_use]
    pub fn is_valid_cpf(digits: &[u32]) -> bool {
        if digits.len() != 11 || is_repeated(digits) {
            return false;
        }

        // Weights count down from `top` to 2 over the leading digits.
        let check_digit = |top: u32| {
            let weighted: u32 = digits.iter().zip((2..=top).rev()).map(|(d, w)| d * w).sum();
            (weighted * 10 % 11) % 10
        };

        check_digit(10) == digits[9] && check_digit(11) == digits[10]
    }

    /// Validates a company's id (14 digits).
    #[must_use]
    pub fn is_valid_cnpj(digits: &[u32]) -> bool {
        if digits.len() != 14 || is_repeated(digits) {
            return false;
        }

        let check_digit = |weights: &[u32]| {
            let weighted: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
            match weighted % 11 {
                0 | 1 => 0,
                r => 11 - r,
            }
        };

        check_digit(&CNPJ_FIRST_WEIGHTS) == digits[12]
            && check_digit(&CNPJ_SECOND_WEIGHTS) == digits[13]
    }
}

fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

impl TaxIdChecksum for CpfCnpj {
    fn is_valid(&self, digits: &str) -> bool {
        let Some(digits) = digits
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };

        match digits.len() {
            11 => Self::is_valid_cpf(&digits),
            14 => Self::is_valid_cnpj(&digits),
            _ => false,
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// CPF or CNPJ, formatted or not. The accepted value is the bare digits.
///
/// Non-digits are stripped before the required check, so input made only of
/// punctuation counts as empty.
///
/// # Examples
///
/// ```
/// use toolbox_validator::prelude::*;
///
/// let doc = Field::new(TaxIdRule::new()).required().label("CPF/CNPJ");
/// assert_eq!(doc.validate(Some("529.982.247-25")).unwrap(), Some("52998224725".to_string()));
/// assert_eq!(doc.validate(Some("529.982.247-24")).unwrap_err().message, "CPF/CNPJ inválido(a)");
/// assert_eq!(doc.validate(Some("..-")).unwrap_err().code, ErrorCode::Required);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "C: Default"))]
pub struct TaxIdRule<C = CpfCnpj> {
    #[serde(skip)]
    checksum: C,
}

impl TaxIdRule {
    /// Uses [`CpfCnpj`].
    #[must_use]
    pub const fn new() -> Self {
        Self { checksum: CpfCnpj }
    }
}

impl<C> TaxIdRule<C> {
    /// Uses a custom checksum.
    #[must_use]
    pub const fn with_checksum(checksum: C) -> Self {
        Self { checksum }
    }
}

impl<C: TaxIdChecksum> FieldRule for TaxIdRule<C> {
    type Output = String;

    fn prepare<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            Cow::Borrowed(raw)
        } else {
            Cow::Owned(raw.chars().filter(char::is_ascii_digit).collect())
        }
    }

    fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<String, ValidationError> {
        if self.checksum.is_valid(input) {
            Ok(input.to_owned())
        } else {
            Err(ctx.fail(ErrorCode::Invalid))
        }
    }
}

/// A CPF/CNPJ field.
pub type TaxIdField<C = CpfCnpj> = Field<TaxIdRule<C>>;

// ============================================================================
// TESTS
// ============================================================================
