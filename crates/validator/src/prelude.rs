//! Prelude module for convenient imports.
//!
//! Provides a single `use toolbox_validator::prelude::*;` import that brings
//! in the field wrapper, its builder trait, every validator kind and the
//! error types.
//!
//! # Examples
//!
//! ```
//! use toolbox_validator::prelude::*;
//!
//! let cpf = Field::new(TaxIdRule::new()).required().label("CPF");
//! assert!(cpf.validate(Some("529.982.247-25")).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Field wrapper, errors, messages
// ============================================================================

pub use crate::foundation::{
    ConfigError, ErrorCode, Field, FieldContext, FieldOptions, FieldRule, FieldSpec,
    MessageCatalog, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in kinds
// ============================================================================

pub use crate::validators::{
    AreaCodeRule, BoundMode, Boolean, Bounds, BrDateRule, Choice, ChoiceInput, ChoiceSource,
    Chosen, CpfCnpj, DateRule, DecimalRule, EmailRule, HtmlRule, IntegerRule, NoSource,
    PhoneRule, TaxIdChecksum, TaxIdRule, TextRule, UrlRule, UrlSyntax, WebUrl,
};

// ============================================================================
// HELPERS: Sanitizer and dates
// ============================================================================

pub use crate::date::{DateError, to_storage_order};
pub use crate::sanitize::sanitize;
