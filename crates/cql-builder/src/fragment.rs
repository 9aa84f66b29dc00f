//! Statement fragments and their renderers.
//!
//! A fragment is one independently populated piece of a statement. Its text
//! and its bound values are produced separately: [`Fragment::render`] never
//! touches parameters and [`Fragment::collect_params`] never touches text.

use std::fmt;

use crate::state::BuilderState;
use crate::value::CqlValue;

const FRAGMENT_COUNT: usize = 9;

/// A named piece of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fragment {
    /// Selected or deleted columns.
    Field,
    /// Table, optionally keyspace qualified.
    Table,
    /// WHERE predicates.
    Where,
    /// ORDER BY clause.
    Order,
    /// LIMIT clause.
    Limit,
    /// Column list and VALUES tuple of an INSERT.
    Value,
    /// SET assignments of an UPDATE.
    Set,
    /// USING options (TTL, TIMESTAMP).
    Option,
    /// IF EXISTS guard of an UPDATE.
    Condition,
}

impl Fragment {
    /// Returns the fragment name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Table => "table",
            Self::Where => "where",
            Self::Order => "order",
            Self::Limit => "limit",
            Self::Value => "value",
            Self::Set => "set",
            Self::Option => "option",
            Self::Condition => "condition",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Renders the literal text of this fragment.
    pub(crate) fn render(self, state: &BuilderState) -> String {
        match self {
            Self::Field => {
                if state.fields.is_empty() {
                    String::from("*")
                } else {
                    state.fields.join(", ")
                }
            }
            Self::Table => {
                let table = state.table.as_deref().unwrap_or_default();
                state
                    .keyspace_name()
                    .map_or_else(|| String::from(table), |ks| format!("{ks}.{table}"))
            }
            Self::Where => {
                if state.predicates.is_empty() {
                    String::new()
                } else {
                    format!("WHERE {}", state.predicates.join(" AND "))
                }
            }
            Self::Order => state
                .order_clause()
                .map_or_else(String::new, |order| format!("ORDER BY {order}")),
            Self::Limit => {
                if state.limit_enabled {
                    String::from("LIMIT ?")
                } else {
                    String::new()
                }
            }
            Self::Value => {
                let markers = vec!["?"; state.insert_columns.len()];
                format!(
                    "({}) VALUES ({})",
                    state.insert_columns.join(", "),
                    markers.join(", ")
                )
            }
            Self::Set => state
                .set_columns
                .iter()
                .map(|column| format!("{column} = ?"))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Option => {
                if state.option_names.is_empty() {
                    String::new()
                } else {
                    let options: Vec<String> = state
                        .option_names
                        .iter()
                        .map(|name| format!("{name} ?"))
                        .collect();
                    format!("USING {}", options.join(" AND "))
                }
            }
            Self::Condition => {
                if state.upsert {
                    String::new()
                } else {
                    String::from("IF EXISTS")
                }
            }
        }
    }

    /// Appends the values bound by this fragment's markers to `params`.
    pub(crate) fn collect_params(self, state: &BuilderState, params: &mut Vec<CqlValue>) {
        match self {
            Self::Where => params.extend_from_slice(&state.predicate_values),
            Self::Limit => {
                if state.limit_enabled {
                    params.push(CqlValue::Int(state.limit_value));
                }
            }
            Self::Value => params.extend_from_slice(&state.insert_values),
            Self::Set => params.extend_from_slice(&state.set_values),
            Self::Option => params.extend_from_slice(&state.option_values),
            Self::Field | Self::Table | Self::Order | Self::Condition => {}
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendered fragment text, looked up by fragment when filling a template.
///
/// Fragments that were never rendered read back as the empty string.
#[derive(Debug, Clone, Default)]
pub struct RenderedFragments {
    texts: [Option<String>; FRAGMENT_COUNT],
}

impl RenderedFragments {
    /// Creates an empty set of rendered fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the rendered text of a fragment, replacing any earlier text.
    pub fn insert(&mut self, fragment: Fragment, text: String) {
        self.texts[fragment.index()] = Some(text);
    }

    /// Returns the rendered text of a fragment, or `""` if it was not rendered.
    #[must_use]
    pub fn get(&self, fragment: Fragment) -> &str {
        self.texts[fragment.index()].as_deref().unwrap_or_default()
    }
}
