//! Validating a person record against per-field rules.
//!
//! Builds a small record, binds validators to its fields, and prints the
//! accumulated errors (an empty list for the valid record).

use fieldcheck::prelude::*;

fn person_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(["name"], vec![no_blank().boxed(), is_string().boxed()]),
        FieldRule::new(["age"], vec![no_blank().boxed(), is_number().boxed()]),
    ]
}

fn main() {
    let person = Record::new().with("name", "Bert").with("age", 30);
    println!("{:?}", validate(&person, &person_rules()));

    let broken = Record::new().with("name", "").with("age", "thirty");
    for error in validate(&broken, &person_rules()) {
        println!("[{}] {}", error.kind(), error);
    }
}
