//! Demonstrates the `tracing` feature.
//!
//! Run with: `cargo run --example traced_validation --features tracing`

use fieldcheck::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let record = Record::new()
        .with("name", "")
        .with("age", "thirty")
        .with("active", true);

    let rules = vec![
        FieldRule::new(["name"], vec![no_blank().boxed(), is_string().boxed()]),
        FieldRule::new(["age"], vec![no_blank().boxed(), is_number().boxed()]),
        FieldRule::new(["active"], vec![no_blank().boxed()]),
    ];

    let errors = validate(&record, &rules);
    for error in &errors {
        println!("[{}] {}", error.kind(), error);
    }
}
