//! # toolbox-validator
//!
//! Validation and normalization of web-form input.
//!
//! ## Quick Start
//!
//! ```
//! use toolbox_validator::prelude::*;
//!
//! let name = Field::new(TextRule::new().max_length(30)).required().label("Nome");
//! let birth = Field::new(BrDateRule).label("Nascimento");
//!
//! assert_eq!(name.validate(Some(" <b>Maria</b> ")).unwrap(), Some("Maria".to_string()));
//! assert_eq!(birth.validate(Some("25/12/1990")).unwrap(), Some("1990-12-25".to_string()));
//!
//! let err = name.validate(Some("")).unwrap_err();
//! assert_eq!(err.code, ErrorCode::Required);
//! assert_eq!(err.message, "Nome obrigatório(a)");
//! ```
//!
//! ## Outcomes
//!
//! Every validator returns `Result<Option<T>, ValidationError>`:
//!
//! - `Ok(None)`: the field was empty and optional;
//! - `Ok(Some(value))`: the accepted value, possibly normalized;
//! - `Err(error)`: the first violated constraint, with a rendered message.
//!
//! Use [`ValidationErrors`](foundation::ValidationErrors) to collect the
//! failures of a whole form.
//!
//! ## Modules
//!
//! - [`foundation`]: errors, message catalog, the [`Field`](foundation::Field)
//!   wrapper and the [`FieldRule`](foundation::FieldRule) trait
//! - [`validators`]: the built-in kinds
//! - [`sanitize`]: the free-text sanitizer
//! - [`date`]: date reordering and parsing helpers

// ValidationError is returned by value from every check; boxing it would add
// an allocation to each failure for no gain.
#![allow(clippy::result_large_err)]

pub mod date;
pub mod foundation;
pub mod prelude;
pub mod sanitize;
pub mod validators;
