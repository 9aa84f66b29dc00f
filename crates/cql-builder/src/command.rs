//! Statement kinds and their templates.

use std::fmt;

use crate::fragment::{Fragment, RenderedFragments};

/// The kind of statement a builder produces.
///
/// A command fixes which fragments take part in the statement and in which
/// order. That order is also the order of the bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Command {
    /// `INSERT INTO ...`
    Insert,
    /// `SELECT ... FROM ...`
    Select,
    /// `UPDATE ... SET ...`
    Update,
    /// `DELETE ... FROM ...`
    Delete,
}

impl Command {
    /// Returns the statement keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Select => "SELECT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Returns the fragments this command uses, in emission order.
    #[must_use]
    pub const fn fragments(self) -> &'static [Fragment] {
        match self {
            Self::Insert => &[Fragment::Table, Fragment::Value, Fragment::Option],
            Self::Select => &[
                Fragment::Field,
                Fragment::Table,
                Fragment::Where,
                Fragment::Order,
                Fragment::Limit,
            ],
            Self::Update => &[
                Fragment::Table,
                Fragment::Option,
                Fragment::Set,
                Fragment::Where,
                Fragment::Condition,
            ],
            Self::Delete => &[
                Fragment::Field,
                Fragment::Table,
                Fragment::Option,
                Fragment::Where,
            ],
        }
    }

    /// Returns true if this command uses `fragment`.
    #[must_use]
    pub fn uses(self, fragment: Fragment) -> bool {
        self.fragments().contains(&fragment)
    }

    /// Fills the command template with rendered fragments.
    ///
    /// Empty fragments leave extra spaces behind; callers collapse whitespace
    /// afterwards.
    #[must_use]
    pub fn render(self, ctx: &RenderedFragments) -> String {
        match self {
            Self::Insert => format!(
                "INSERT INTO {} {} {}",
                ctx.get(Fragment::Table),
                ctx.get(Fragment::Value),
                ctx.get(Fragment::Option),
            ),
            Self::Select => format!(
                "SELECT {} FROM {} {} {} {}",
                ctx.get(Fragment::Field),
                ctx.get(Fragment::Table),
                ctx.get(Fragment::Where),
                ctx.get(Fragment::Order),
                ctx.get(Fragment::Limit),
            ),
            Self::Update => format!(
                "UPDATE {} {} SET {} {} {}",
                ctx.get(Fragment::Table),
                ctx.get(Fragment::Option),
                ctx.get(Fragment::Set),
                ctx.get(Fragment::Where),
                ctx.get(Fragment::Condition),
            ),
            Self::Delete => {
                // A bare `*` means "whole row", which DELETE spells as nothing.
                let field = match ctx.get(Fragment::Field) {
                    "*" => "",
                    field => field,
                };
                format!(
                    "DELETE {} FROM {} {} {}",
                    field,
                    ctx.get(Fragment::Table),
                    ctx.get(Fragment::Option),
                    ctx.get(Fragment::Where),
                )
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
