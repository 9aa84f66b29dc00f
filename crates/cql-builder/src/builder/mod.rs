//! Chained CQL statement builder.
//!
//! A builder is created for one [`Command`] and collects fragments through
//! chained calls. Fragments the command does not use are accepted and
//! ignored, so the same call chain can be replayed against any command.
//!
//! # Example
//!
//! ```rust
//! use cql_builder::select;
//!
//! let statement = select()
//!     .table("users")
//!     .where_clause("age >= ?", [18])?
//!     .where_clause("country IN (?, ?)", ["KR", "JP"])?
//!     .limit(5)
//!     .build()?;
//!
//! assert_eq!(
//!     statement.query(),
//!     "SELECT * FROM users WHERE age >= ? AND country IN (?, ?) LIMIT ?"
//! );
//! assert_eq!(statement.params().len(), 4);
//! # Ok::<(), cql_builder::BuilderError>(())
//! ```

mod fields;

use tracing::{debug, trace, warn};

pub use fields::IntoFields;

use crate::command::Command;
use crate::error::{BuilderError, Result};
use crate::fragment::{Fragment, RenderedFragments};
use crate::placeholder;
use crate::state::BuilderState;
use crate::statement::Statement;
use crate::value::{CqlValue, ToCqlValue};

/// Creates a builder for an `INSERT` statement.
#[must_use]
pub fn insert() -> CqlBuilder {
    CqlBuilder::new(Command::Insert)
}

/// Creates a builder for a `SELECT` statement.
#[must_use]
pub fn select() -> CqlBuilder {
    CqlBuilder::new(Command::Select)
}

/// Creates a builder for an `UPDATE` statement.
#[must_use]
pub fn update() -> CqlBuilder {
    CqlBuilder::new(Command::Update)
}

/// Creates a builder for a `DELETE` statement.
#[must_use]
pub fn delete() -> CqlBuilder {
    CqlBuilder::new(Command::Delete)
}

/// A CQL statement builder.
#[derive(Debug, Clone, PartialEq)]
pub struct CqlBuilder {
    command: Command,
    state: BuilderState,
}

impl CqlBuilder {
    /// Creates an empty builder for `command`.
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            command,
            state: BuilderState::default(),
        }
    }

    /// Returns the command this builder produces.
    #[must_use]
    pub const fn command(&self) -> Command {
        self.command
    }

    // Every command renders a table, so only the other setters go through here.
    fn accept(&self, fragment: Fragment) {
        if !self.command.uses(fragment) {
            trace!(
                command = %self.command,
                fragment = %fragment,
                "fragment ignored by command"
            );
        }
    }

    /// Sets the table, dropping any keyspace set earlier.
    #[must_use]
    pub fn table(mut self, table: &str) -> Self {
        self.state.keyspace = None;
        self.state.table = Some(String::from(table));
        self
    }

    /// Sets a keyspace qualified table (`keyspace.table`).
    #[must_use]
    pub fn qualified_table(mut self, keyspace: &str, table: &str) -> Self {
        self.state.keyspace = Some(String::from(keyspace));
        self.state.table = Some(String::from(table));
        self
    }

    /// Appends one column name or a list of them.
    #[must_use]
    pub fn field<F: IntoFields>(mut self, fields: F) -> Self {
        self.accept(Fragment::Field);
        self.state.fields.extend(fields.into_fields());
        self
    }

    /// Adds a predicate, joined to earlier ones with `AND`.
    ///
    /// `values` are bound to the `?` markers of `clause`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::PlaceholderMismatch`] if the number of values
    /// differs from the number of `?` markers in `clause`.
    pub fn where_clause<I>(mut self, clause: &str, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToCqlValue,
    {
        let values: Vec<CqlValue> = values.into_iter().map(ToCqlValue::to_cql_value).collect();
        let placeholders = placeholder::count_placeholders(clause);

        if values.len() != placeholders {
            warn!(
                clause,
                placeholders,
                values = values.len(),
                "rejected where clause"
            );
            return Err(BuilderError::PlaceholderMismatch {
                clause: String::from(clause),
                placeholders,
                values: values.len(),
            });
        }

        self.accept(Fragment::Where);
        self.state.predicates.push(String::from(clause));
        self.state.predicate_values.extend(values);
        Ok(self)
    }

    /// Adds a predicate that binds no values.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::PlaceholderMismatch`] if `clause` contains a
    /// `?` marker.
    pub fn where_raw(self, clause: &str) -> Result<Self> {
        self.where_clause(clause, Vec::<CqlValue>::new())
    }

    /// Sets the ORDER BY clause, replacing any earlier one.
    #[must_use]
    pub fn order(mut self, clause: &str) -> Self {
        self.accept(Fragment::Order);
        self.state.order = Some(String::from(clause));
        self
    }

    /// Sets the row limit. Values below 1 disable the LIMIT clause.
    #[must_use]
    pub fn limit(mut self, n: i64) -> Self {
        self.accept(Fragment::Limit);
        self.state.limit_enabled = n > 0;
        self.state.limit_value = n;
        self
    }

    /// Adds a column and the value to insert into it.
    #[must_use]
    pub fn value<T: ToCqlValue>(mut self, column: &str, value: T) -> Self {
        self.accept(Fragment::Value);
        self.state.insert_columns.push(String::from(column));
        self.state.insert_values.push(value.to_cql_value());
        self
    }

    /// Adds a `column = ?` assignment.
    #[must_use]
    pub fn set<T: ToCqlValue>(mut self, column: &str, value: T) -> Self {
        self.accept(Fragment::Set);
        self.state.set_columns.push(String::from(column));
        self.state.set_values.push(value.to_cql_value());
        self
    }

    /// Adds a `USING` option such as `TTL` or `TIMESTAMP`.
    #[must_use]
    pub fn option<T: ToCqlValue>(mut self, name: &str, value: T) -> Self {
        self.accept(Fragment::Option);
        self.state.option_names.push(String::from(name));
        self.state.option_values.push(value.to_cql_value());
        self
    }

    /// Controls the `IF EXISTS` guard of UPDATE statements.
    ///
    /// With `upsert(true)` the guard is left out, so the update also creates
    /// missing rows.
    #[must_use]
    pub fn upsert(mut self, upsert: bool) -> Self {
        self.accept(Fragment::Condition);
        self.state.upsert = upsert;
        self
    }

    /// Drops everything collected so far, keeping the command.
    #[must_use]
    pub fn clear(mut self) -> Self {
        trace!(command = %self.command, "clearing builder");
        self.state = BuilderState::default();
        self
    }

    /// Builds the statement text and its bound values.
    ///
    /// The builder is left untouched, so it can be built again or extended.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingTable`] if no non-empty table was set.
    pub fn build(&self) -> Result<Statement> {
        if self.state.table_name().is_none() {
            return Err(BuilderError::MissingTable);
        }

        let mut ctx = RenderedFragments::new();
        let mut params = vec![];

        for &fragment in self.command.fragments() {
            ctx.insert(fragment, fragment.render(&self.state));
            fragment.collect_params(&self.state, &mut params);
        }

        let query = placeholder::collapse_whitespace(&self.command.render(&ctx));
        debug!(
            command = %self.command,
            query = %query,
            params = params.len(),
            "built statement"
        );

        Ok(Statement::new(query, params))
    }
}
