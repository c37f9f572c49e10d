//! Query runner seam and database aliases
//!
//! Validators never talk to a database; the helpers here are for the layer
//! around them. A [`QueryRunner`] is whatever executes SQL (a connection
//! pool, a test double). [`Databases`] maps aliases to runners.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StorageError;

/// A column value.
pub type Value = serde_json::Value;

/// One result row, columns in result-set order.
pub type Row = IndexMap<String, Value>;

/// Alias used when none is given.
pub const DEFAULT_ALIAS: &str = "default";

/// Executes SQL against one database.
pub trait QueryRunner: Send + Sync {
    /// Runs a query with positional parameters and returns every row.
    fn run_query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StorageError>;

    /// Runs a statement inside a transaction, discarding any result.
    fn execute(&self, sql: &str) -> Result<(), StorageError>;

    /// Returns the first column of the first row, or `None` for no rows.
    fn scalar_query(&self, sql: &str) -> Result<Option<Value>, StorageError> {
        Ok(self
            .run_query(sql, &[])?
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .map(|(_, value)| value))
    }
}

/// Runners by alias.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use toolbox_storage::{Databases, QueryRunner, Row, StorageError, Value};
///
/// struct One;
///
/// impl QueryRunner for One {
///     fn run_query(&self, _sql: &str, _params: &[Value]) -> Result<Vec<Row>, StorageError> {
///         Ok(vec![Row::from([("n".to_string(), Value::from(1))])])
///     }
///
///     fn execute(&self, _sql: &str) -> Result<(), StorageError> {
///         Ok(())
///     }
/// }
///
/// let mut dbs = Databases::new();
/// dbs.register("default", Arc::new(One));
///
/// assert_eq!(dbs.query_value("default", "SELECT 1").unwrap(), Some(Value::from(1)));
/// assert!(dbs.query_value("reports", "SELECT 1").is_err());
/// ```
#[derive(Default, Clone)]
pub struct Databases {
    runners: BTreeMap<String, Arc<dyn QueryRunner>>,
}

impl Databases {
    /// No aliases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `runner` under `alias`, returning the runner it replaces.
    pub fn register(
        &mut self,
        alias: impl Into<String>,
        runner: Arc<dyn QueryRunner>,
    ) -> Option<Arc<dyn QueryRunner>> {
        self.runners.insert(alias.into(), runner)
    }

    /// Looks up the runner for `alias`.
    pub fn get(&self, alias: &str) -> Result<&Arc<dyn QueryRunner>, StorageError> {
        self.runners
            .get(alias)
            .ok_or_else(|| StorageError::UnknownAlias {
                alias: alias.to_owned(),
            })
    }

    /// Registered aliases, sorted.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.runners.keys().map(String::as_str)
    }

    /// Runs a query and returns every row as an ordered column map.
    pub fn fetch_rows(
        &self,
        alias: &str,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<Row>, StorageError> {
        let runner = self.get(alias)?;
        debug!(alias, params = params.len(), "running query");
        runner.run_query(sql, params)
    }

    /// Runs a query and decodes every row into `T` by column name.
    pub fn fetch_as<T: DeserializeOwned>(
        &self,
        alias: &str,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<T>, StorageError> {
        self.fetch_rows(alias, sql, params)?
            .into_iter()
            .map(|row| -> Result<T, StorageError> {
                let object = row.into_iter().collect::<serde_json::Map<_, _>>();
                Ok(serde_json::from_value(Value::Object(object))?)
            })
            .collect()
    }

    /// Returns the first column of the first row.
    pub fn query_value(&self, alias: &str, sql: &str) -> Result<Option<Value>, StorageError> {
        let runner = self.get(alias)?;
        debug!(alias, "running scalar query");
        runner.scalar_query(sql)
    }

    /// Runs a statement.
    pub fn execute(&self, alias: &str, sql: &str) -> Result<(), StorageError> {
        let runner = self.get(alias)?;
        debug!(alias, "executing statement");
        runner.execute(sql)
    }
}

impl fmt::Debug for Databases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Databases")
            .field("aliases", &self.runners.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Escapes text for inclusion in a single-quoted SQL literal.
///
/// Drops `%` and doubles `'`. Prefer query parameters; this exists for
/// statements that cannot take them.
///
/// ```
/// use toolbox_storage::sql_escape;
///
/// assert_eq!(sql_escape("O'Brien 100%"), "O''Brien 100");
/// ```
pub fn sql_escape(text: &str) -> String {
    text.replace('%', "").replace('\'', "''")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::sync::Mutex;

    /// Returns canned rows and records what it was asked to run.
    #[derive(Default)]
    struct CannedRunner {
        rows: Vec<Row>,
        executed: Mutex<Vec<String>>,
    }

    impl CannedRunner {
        fn with_rows(rows: Vec<Row>) -> Self {
            Self {
                rows,
                executed: Mutex::default(),
            }
        }

        fn executed(&self) -> Vec<String> {
            self.executed.lock().unwrap().clone()
        }
    }

    impl QueryRunner for CannedRunner {
        fn run_query(&self, sql: &str, _params: &[Value]) -> Result<Vec<Row>, StorageError> {
            self.executed.lock().unwrap().push(sql.to_owned());
            Ok(self.rows.clone())
        }

        fn execute(&self, sql: &str) -> Result<(), StorageError> {
            if sql.is_empty() {
                return Err(StorageError::Query("empty statement".into()));
            }
            self.executed.lock().unwrap().push(sql.to_owned());
            Ok(())
        }
    }

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    fn people() -> Vec<Row> {
        vec![
            row(&[("id", Value::from(1)), ("name", Value::from("Ana"))]),
            row(&[("id", Value::from(2)), ("name", Value::from("Rui"))]),
        ]
    }

    #[test]
    fn test_scalar_is_first_column_of_first_row() {
        let runner = CannedRunner::with_rows(people());
        assert_eq!(runner.scalar_query("SELECT id, name").unwrap(), Some(Value::from(1)));
        assert_eq!(CannedRunner::default().scalar_query("SELECT 1").unwrap(), None);
    }

    #[test]
    fn test_rows_keep_column_order() {
        let mut dbs = Databases::new();
        dbs.register(DEFAULT_ALIAS, Arc::new(CannedRunner::with_rows(people())));

        let rows = dbs.fetch_rows(DEFAULT_ALIAS, "SELECT id, name", &[]).unwrap();
        let columns: Vec<_> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(columns, ["id", "name"]);
    }

    #[test]
    fn test_rows_decode_by_column_name() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Person {
            id: u32,
            name: String,
        }

        let mut dbs = Databases::new();
        dbs.register(DEFAULT_ALIAS, Arc::new(CannedRunner::with_rows(people())));

        let people: Vec<Person> = dbs.fetch_as(DEFAULT_ALIAS, "SELECT id, name", &[]).unwrap();
        assert_eq!(
            people,
            [
                Person { id: 1, name: "Ana".into() },
                Person { id: 2, name: "Rui".into() },
            ]
        );

        let err = dbs
            .fetch_as::<u32>(DEFAULT_ALIAS, "SELECT id, name", &[])
            .unwrap_err();
        assert!(matches!(err, StorageError::Decode(_)));
    }

    #[test]
    fn test_unknown_alias_is_an_error() {
        let dbs = Databases::new();
        let err = dbs.execute("reports", "DELETE FROM t").unwrap_err();
        assert!(matches!(err, StorageError::UnknownAlias { alias } if alias == "reports"));
    }

    #[test]
    fn test_execute_goes_to_the_aliased_runner() {
        let main = Arc::new(CannedRunner::default());
        let reports = Arc::new(CannedRunner::default());

        let mut dbs = Databases::new();
        dbs.register("main", main.clone());
        dbs.register("reports", reports.clone());

        dbs.execute("reports", "UPDATE t SET x = 1").unwrap();
        assert!(main.executed().is_empty());
        assert_eq!(reports.executed(), ["UPDATE t SET x = 1"]);
        assert!(dbs.execute("reports", "").is_err());

        assert_eq!(dbs.aliases().collect::<Vec<_>>(), ["main", "reports"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut dbs = Databases::new();
        assert!(dbs.register("a", Arc::new(CannedRunner::default())).is_none());
        assert!(dbs.register("a", Arc::new(CannedRunner::default())).is_some());
    }

    #[test]
    fn test_sql_escape() {
        assert_eq!(sql_escape("it's 50% off"), "it''s 50 off");
        assert_eq!(sql_escape(""), "");
        assert_eq!(sql_escape("''"), "''''");
    }
}
