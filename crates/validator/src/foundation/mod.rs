//! Core validation types
//!
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorCode`]
//! - **Messages**: [`MessageCatalog`], [`ConfigError`]
//! - **Fields**: [`Field`], [`FieldRule`], [`FieldSpec`], [`FieldContext`],
//!   [`FieldOptions`]
//!
//! Every validator kind implements [`FieldRule`] and is driven through
//! [`Field::validate`], which returns `Result<Option<T>, ValidationError>`.

pub mod error;
pub mod field;
pub mod messages;

pub use error::{ErrorCode, ValidationError, ValidationErrors};
pub use field::{DEFAULT_LABEL, Field, FieldContext, FieldOptions, FieldRule, FieldSpec};
pub use messages::{ConfigError, MessageCatalog};

/// Outcome of validating one field.
pub type ValidationResult<T> = Result<Option<T>, ValidationError>;
