//! Tests for UPDATE and DELETE statements.

mod common;
use common::{build, int, text};

use cql_builder::{delete, update, BuilderError};

// ===================================================================
// UPDATE
// ===================================================================

#[test]
fn update_without_table() {
    assert_eq!(update().build(), Err(BuilderError::MissingTable));
    assert_eq!(
        update().set("c", 1).build(),
        Err(BuilderError::MissingTable)
    );
}

#[test]
fn update_multiple_where() {
    let single = build(
        &update()
            .table("test_table")
            .set("column1", 1)
            .where_clause("key1 = ?", ["a"])
            .unwrap(),
    );
    assert_eq!(
        single.query(),
        "UPDATE test_table SET column1 = ? WHERE key1 = ? IF EXISTS"
    );
    assert_eq!(single.params(), [int(1), text("a")]);

    let interleaved = build(
        &update()
            .table("test_table")
            .set("column1", 1)
            .where_clause("key1 = ?", ["a"])
            .unwrap()
            .set("column2", 2)
            .where_clause("key2 = ?", ["b"])
            .unwrap(),
    );
    assert_eq!(
        interleaved.query(),
        "UPDATE test_table SET column1 = ?, column2 = ? WHERE key1 = ? AND key2 = ? IF EXISTS"
    );
    assert_eq!(interleaved.params(), [int(1), int(2), text("a"), text("b")]);
}

#[test]
fn update_with_option() {
    let statement = build(
        &update()
            .table("test_table")
            .set("column1", 1)
            .option("TTL", 3000),
    );
    assert_eq!(
        statement.query(),
        "UPDATE test_table USING TTL ? SET column1 = ? IF EXISTS"
    );
    assert_eq!(statement.params(), [int(3000), int(1)]);
}

#[test]
fn update_with_upsert() {
    let statement = build(
        &update()
            .table("test_table")
            .set("column1", 1)
            .where_clause("key1 = ?", ["a"])
            .unwrap()
            .upsert(true),
    );
    assert_eq!(
        statement.query(),
        "UPDATE test_table SET column1 = ? WHERE key1 = ?"
    );
    assert_eq!(statement.params(), [int(1), text("a")]);

    let guarded = build(
        &update()
            .table("test_table")
            .set("column1", 1)
            .upsert(true)
            .upsert(false),
    );
    assert_eq!(
        guarded.query(),
        "UPDATE test_table SET column1 = ? IF EXISTS"
    );
}

#[test]
fn update_ignores_select_fragments() {
    let statement = build(
        &update()
            .table("test_table")
            .field("ignored")
            .order("ignored")
            .limit(10)
            .set("column1", 1),
    );
    assert_eq!(
        statement.query(),
        "UPDATE test_table SET column1 = ? IF EXISTS"
    );
    assert_eq!(statement.params(), [int(1)]);
}

// ===================================================================
// DELETE
// ===================================================================

#[test]
fn delete_without_table() {
    assert_eq!(delete().build(), Err(BuilderError::MissingTable));
}

#[test]
fn delete_multiple_where() {
    let single = build(
        &delete()
            .table("test_table")
            .where_clause("key1 = ?", ["a"])
            .unwrap(),
    );
    assert_eq!(single.query(), "DELETE FROM test_table WHERE key1 = ?");
    assert_eq!(single.params(), [text("a")]);

    let double = build(
        &delete()
            .table("test_table")
            .where_clause("key1 = ?", ["a"])
            .unwrap()
            .where_clause("key2 = ?", ["b"])
            .unwrap(),
    );
    assert_eq!(
        double.query(),
        "DELETE FROM test_table WHERE key1 = ? AND key2 = ?"
    );
    assert_eq!(double.params(), [text("a"), text("b")]);
}

#[test]
fn delete_with_option() {
    let statement = build(
        &delete()
            .table("test_table")
            .where_clause("key1 = ?", ["a"])
            .unwrap()
            .option("TIMESTAMP", 12_345_678),
    );
    assert_eq!(
        statement.query(),
        "DELETE FROM test_table USING TIMESTAMP ? WHERE key1 = ?"
    );
    assert_eq!(statement.params(), [int(12_345_678), text("a")]);
}

#[test]
fn delete_multiple_fields() {
    let statement = build(
        &delete()
            .table("test_table")
            .where_clause("key1 = ?", ["a"])
            .unwrap()
            .field(["column1", "column2"]),
    );
    assert_eq!(
        statement.query(),
        "DELETE column1, column2 FROM test_table WHERE key1 = ?"
    );
    assert_eq!(statement.params(), [text("a")]);
}

#[test]
fn delete_keyspace_qualified() {
    let statement = build(&delete().qualified_table("test_keyspace", "test_table"));
    assert_eq!(statement.query(), "DELETE FROM test_keyspace.test_table");
    assert!(statement.params().is_empty());
}
