//! Accumulated builder state.

use crate::value::CqlValue;

/// Everything a builder has collected so far.
///
/// Each fragment owns its own containers; the paired containers
/// (`insert_*`, `set_*`, `option_*`) are only ever appended to together, so
/// they always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuilderState {
    pub keyspace: Option<String>,
    pub table: Option<String>,
    pub fields: Vec<String>,
    pub predicates: Vec<String>,
    pub predicate_values: Vec<CqlValue>,
    pub order: Option<String>,
    pub limit_enabled: bool,
    // Kept even when the limit is disabled; only surfaced while enabled.
    pub limit_value: i64,
    pub insert_columns: Vec<String>,
    pub insert_values: Vec<CqlValue>,
    pub set_columns: Vec<String>,
    pub set_values: Vec<CqlValue>,
    pub option_names: Vec<String>,
    pub option_values: Vec<CqlValue>,
    pub upsert: bool,
}

impl BuilderState {
    /// Returns the table name when one is set and non-empty.
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns the keyspace when one is set and non-empty.
    pub fn keyspace_name(&self) -> Option<&str> {
        self.keyspace.as_deref().filter(|k| !k.is_empty())
    }

    /// Returns the ORDER BY clause when one is set and non-empty.
    pub fn order_clause(&self) -> Option<&str> {
        self.order.as_deref().filter(|o| !o.is_empty())
    }
}
