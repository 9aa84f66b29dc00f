//! Built statements.

use std::fmt;

use crate::placeholder;
use crate::value::CqlValue;

/// A finished statement: CQL text with `?` markers plus the values bound to
/// them, in marker order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statement {
    query: String,
    params: Vec<CqlValue>,
}

impl Statement {
    pub(crate) const fn new(query: String, params: Vec<CqlValue>) -> Self {
        Self { query, params }
    }

    /// Returns the statement text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the bound values, in marker order.
    #[must_use]
    pub fn params(&self) -> &[CqlValue] {
        &self.params
    }

    /// Splits the statement into its text and bound values.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<CqlValue>) {
        (self.query, self.params)
    }

    /// Returns the statement text with every bound value inlined.
    ///
    /// **Warning**: for logging only. Send `query()` and `params()` to the
    /// driver instead.
    #[must_use]
    pub fn interpolate(&self) -> String {
        placeholder::interpolate(&self.query, &self.params)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

impl From<Statement> for (String, Vec<CqlValue>) {
    fn from(statement: Statement) -> Self {
        statement.into_parts()
    }
}
