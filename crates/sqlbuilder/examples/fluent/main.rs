//! Example: building commands with `SqlBuilder`.
//!
//! Run with:
//!   cargo run --example fluent -p sqlbuilder

use sqlbuilder::prelude::*;

fn main() -> BuilderResult<()> {
    // SELECT with a join and an IN filter
    let mut b = SqlBuilder::new();
    b.select(["c.id", "c.name"])
        .from(["customers"])
        .inner_join("orders", "customers", "id", "customer_id")
        .where_("c.region")
        .in_list(["north", "south"]);
    println!("{}", b.finish());

    // Parameterized SELECT
    let mut b = SqlBuilder::new();
    b.select_params([
        ParameterBinding::new("tenant", 42),
        ParameterBinding::new("status", "active"),
    ]);
    let command = b.finish();
    command.check()?;
    println!("{command}");
    for p in command.parameters() {
        println!("  {} = {:?}", p.name, p.value);
    }

    // INSERT into a non-default schema
    let config = BuilderConfig::new().with_schema("sales")?;
    let mut b = SqlBuilder::with_config(config);
    b.insert(
        "orders",
        ["id", "customer", "note"],
        [Value::from(7), Value::from("acme"), Value::Null],
    );
    println!("{}", b.finish());

    // DELETE
    let mut b = SqlBuilder::new();
    b.delete().from(["sessions"]).where_("user_id").not_equal_to(0);
    println!("{}", b.finish());

    Ok(())
}
