#![allow(dead_code)]

use cql_builder::{CqlBuilder, CqlValue, Statement};

pub fn build(builder: &CqlBuilder) -> Statement {
    match builder.build() {
        Ok(statement) => statement,
        Err(e) => panic!("Failed to build {} statement: {e}", builder.command()),
    }
}

pub const fn int(n: i64) -> CqlValue {
    CqlValue::Int(n)
}

pub fn text(s: &str) -> CqlValue {
    CqlValue::Text(String::from(s))
}

/// Asserts the statement has exactly one parameter per `?` marker.
pub fn assert_markers_match(statement: &Statement) {
    let markers = statement.query().matches('?').count();
    assert_eq!(
        markers,
        statement.params().len(),
        "marker/param count differs for: {}",
        statement.query()
    );
}
