//! # cql-builder
//!
//! A chained builder for Cassandra CQL prepared statements.
//!
//! This crate provides:
//! - One builder per statement kind (`INSERT`, `SELECT`, `UPDATE`, `DELETE`)
//! - Statement text with `?` markers and a parameter list in marker order
//! - Early errors for missing tables and mismatched predicate values
//!
//! The builder never talks to a database. It only assembles text and values
//! for a driver's prepared-statement API.
//!
//! ## Building Statements
//!
//! ```rust
//! use cql_builder::{insert, update, CqlValue};
//!
//! let statement = insert()
//!     .qualified_table("shop", "orders")
//!     .value("id", 1)
//!     .value("item", "book")
//!     .option("TTL", 86400)
//!     .build()?;
//!
//! assert_eq!(
//!     statement.query(),
//!     "INSERT INTO shop.orders (id, item) VALUES (?, ?) USING TTL ?"
//! );
//! assert_eq!(
//!     statement.params(),
//!     [CqlValue::Int(1), CqlValue::Text(String::from("book")), CqlValue::Int(86400)]
//! );
//!
//! // Parameters follow the statement text, not the call order.
//! let statement = update()
//!     .table("orders")
//!     .set("item", "pen")
//!     .option("TTL", 3000)
//!     .build()?;
//!
//! assert_eq!(statement.query(), "UPDATE orders USING TTL ? SET item = ? IF EXISTS");
//! assert_eq!(statement.params()[0], CqlValue::Int(3000));
//! # Ok::<(), cql_builder::BuilderError>(())
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use cql_builder::{select, BuilderError};
//!
//! // Predicate values are checked against the `?` markers right away.
//! assert!(select().where_clause("a IN (?, ?)", [1]).is_err());
//!
//! // A table is required before building.
//! assert_eq!(select().build(), Err(BuilderError::MissingTable));
//! ```

pub mod value;

pub mod builder;
pub mod command;
pub mod error;
pub mod fragment;
pub mod placeholder;
mod state;
pub mod statement;

pub use builder::{delete, insert, select, update, CqlBuilder, IntoFields};
pub use command::Command;
pub use error::{BuilderError, Result};
pub use fragment::{Fragment, RenderedFragments};
pub use statement::Statement;
pub use value::{CqlValue, ToCqlValue};
