//! Builds one statement of each kind and prints it.
//!
//! Run with `cargo run -p cql-builder --example statements`.

use cql_builder::{cql_values, delete, insert, select, update, BuilderError, Statement};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn print(label: &str, statement: &Statement) {
    println!("{label}:");
    println!("  query:  {}", statement.query());
    println!("  params: {:?}", statement.params());
    println!("  inline: {}", statement.interpolate());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The builder logs every built statement at DEBUG.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let created = insert()
        .qualified_table("shop", "orders")
        .value("id", 42)
        .value("customer", "O'Brien")
        .value("total", 19.5)
        .option("TTL", 86400)
        .build()?;
    print("insert", &created);

    let listed = select()
        .qualified_table("shop", "orders")
        .field(["id", "total"])
        .where_clause("customer = ?", ["O'Brien"])?
        .where_clause("total >= ? AND total < ?", cql_values![10, 100.0])?
        .order("id DESC")
        .limit(20)
        .build()?;
    print("select", &listed);

    let repriced = update()
        .qualified_table("shop", "orders")
        .set("total", 17.5)
        .where_clause("id = ?", [42])?
        .option("TIMESTAMP", 1_700_000_000_000_i64)
        .build()?;
    print("update", &repriced);

    let removed = delete()
        .qualified_table("shop", "orders")
        .where_clause("id = ?", [42])?
        .build()?;
    print("delete", &removed);

    // Mismatched predicates fail before anything is built.
    match select().where_clause("id IN (?, ?)", [1]) {
        Err(err @ BuilderError::PlaceholderMismatch { .. }) => println!("rejected: {err}"),
        Err(err) => return Err(err.into()),
        Ok(_) => println!("unexpectedly accepted"),
    }

    Ok(())
}
