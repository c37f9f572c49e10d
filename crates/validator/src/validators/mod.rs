//! Built-in validators
//!
//! Each kind is a rule ([`FieldRule`](crate::foundation::FieldRule)) wrapped
//! in a [`Field`](crate::foundation::Field) that carries the required flag
//! and label. [`Boolean`] and [`Choice`] have their own input shapes and are
//! used directly.
//!
//! # Categories
//!
//! - **Text**: [`TextRule`], [`HtmlRule`], [`EmailRule`], [`UrlRule`]
//! - **Numeric**: [`IntegerRule`], [`DecimalRule`], [`Bounds`]
//! - **Brazilian formats**: [`AreaCodeRule`], [`PhoneRule`], [`BrDateRule`],
//!   [`TaxIdRule`]
//! - **Dates**: [`DateRule`], [`BrDateRule`]
//! - **Selection**: [`Boolean`], [`Choice`]
//!
//! # Examples
//!
//! ```
//! use toolbox_validator::prelude::*;
//!
//! let age = Field::new(IntegerRule::new().max_length(3)).required().label("Idade");
//! let email = Field::new(EmailRule::new().max_length(50)).label("E-mail");
//!
//! assert_eq!(age.validate(Some("42")).unwrap(), Some("42".to_string()));
//! assert_eq!(email.validate(None).unwrap(), None);
//! ```

pub mod boolean;
pub mod choice;
pub mod date;
pub mod email;
pub mod numeric;
pub mod phone;
pub mod tax_id;
pub mod text;
pub mod url;

pub use boolean::Boolean;
pub use choice::{Choice, ChoiceInput, ChoiceSource, Chosen, NoSource};
pub use date::{BrDateField, BrDateRule, DateField, DateRule};
pub use email::{EmailField, EmailRule};
pub use numeric::{
    BoundMode, Bounds, DEFAULT_DECIMAL_PLACES, DEFAULT_MAX_DIGITS, DecimalField, DecimalRule,
    IntegerField, IntegerRule,
};
pub use phone::{AreaCodeField, AreaCodeRule, PhoneField, PhoneRule};
pub use tax_id::{CpfCnpj, TaxIdChecksum, TaxIdField, TaxIdRule};
pub use text::{HtmlField, HtmlRule, TextField, TextRule};
pub use url::{UrlField, UrlRule, UrlSyntax, WebUrl};
