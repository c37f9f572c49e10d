//! # toolbox-storage
//!
//! Collaborators of the form layer that touch the outside world:
//!
//! - [`QueryRunner`] and [`Databases`]: SQL execution behind a trait, looked
//!   up by alias, plus [`sql_escape`] for literal-only statements;
//! - [`FileStore`] and [`LocalFileStore`]: saving and deleting uploads.
//!
//! No database driver is bundled: implement [`QueryRunner`] over the pool
//! the application already has.

pub mod error;
pub mod files;
pub mod query;

pub use error::StorageError;
pub use files::{FileStore, LocalFileStore};
pub use query::{DEFAULT_ALIAS, Databases, QueryRunner, Row, Value, sql_escape};
