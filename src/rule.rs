//! Field rules and the validate orchestrator
//!
//! A [`FieldRule`] binds a list of field names to the validators that must
//! pass for each of those fields. [`validate`] runs a sequence of rules
//! against a record and flattens every reported error into one ordered list.
//!
//! # Ordering
//!
//! The result order is fully determined: rules run in the order supplied,
//! each rule walks the record's fields in insertion order (the rule's own
//! `fields` order does not reorder anything), and each field runs its
//! validators in listed order.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let person = Record::new().with("name", "Bert").with("age", 30);
//!
//! let errors = validate(
//!     &person,
//!     &[
//!         FieldRule::new(["name"], vec![no_blank().boxed(), is_string().boxed()]),
//!         FieldRule::new(["age"], vec![no_blank().boxed(), is_number().boxed()]),
//!     ],
//! );
//!
//! assert!(errors.is_empty());
//! ```

use crate::error::ValidationError;
use crate::validator::Validator;
use crate::value::Record;

/// A binding from a set of field names to the validators to run for each of
/// those fields.
///
/// Constructed once per validation call site and not mutated afterwards.
#[derive(Debug)]
pub struct FieldRule {
    fields: Vec<String>,
    validators: Vec<Box<dyn Validator>>,
}

impl FieldRule {
    /// Create a rule from field names and an ordered validator list.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{is_string, no_blank, FieldRule, Validator};
    ///
    /// let rule = FieldRule::new(
    ///     ["name", "nickname"],
    ///     vec![no_blank().boxed(), is_string().boxed()],
    /// );
    /// assert_eq!(rule.fields(), ["name", "nickname"]);
    /// ```
    pub fn new<I, S>(fields: I, validators: Vec<Box<dyn Validator>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldRule {
            fields: fields.into_iter().map(Into::into).collect(),
            validators,
        }
    }

    /// The field names this rule applies to.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Run every validator against every matching field of the record.
    ///
    /// Fields are visited in the record's insertion order, filtered down to
    /// the names this rule lists; a named field the record lacks simply
    /// matches nothing. Each validator's output is appended in turn, so the
    /// result is ordered by (field, validator).
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{is_string, FieldRule, Record, Validator};
    ///
    /// let record = Record::new().with("a", 1).with("b", "x");
    /// let rule = FieldRule::new(["a"], vec![is_string().boxed()]);
    ///
    /// // Only field `a` is checked; `b` is untouched.
    /// assert_eq!(rule.run(&record).len(), 1);
    /// ```
    pub fn run(&self, record: &Record) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (name, value) in record.iter() {
            if !self.applies_to(name) {
                continue;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(field = name, "checking field");
            for validator in &self.validators {
                errors.extend(validator.validate(value));
            }
        }
        errors
    }

    #[inline]
    fn applies_to(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }
}

/// Run a sequence of rules against a record and flatten all reported errors
/// into one ordered list.
///
/// An empty result means the record is fully valid against all supplied
/// rules. The computation is pure and stateless: calling it twice with the
/// same inputs yields equal results.
///
/// # Examples
///
/// ```
/// use fieldcheck::prelude::*;
///
/// let person = Record::new().with("name", "").with("age", "thirty");
///
/// let errors = validate(
///     &person,
///     &[
///         FieldRule::new(["name"], vec![no_blank().boxed(), is_string().boxed()]),
///         FieldRule::new(["age"], vec![no_blank().boxed(), is_number().boxed()]),
///     ],
/// );
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].message(), "Value '' is blank!");
/// assert_eq!(errors[1].message(), "Value 'thirty' is no number!");
/// ```
pub fn validate(record: &Record, rules: &[FieldRule]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for rule in rules {
        errors.extend(rule.run(record));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        rules = rules.len(),
        errors = errors.len(),
        "validation complete"
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validator::{is_number, is_string, no_blank};
    use crate::value::Value;

    #[test]
    fn test_only_listed_fields_are_checked() {
        let record = Record::new().with("a", 1).with("b", "x");
        let rule = FieldRule::new(["a"], vec![is_string().boxed()]);

        let errors = rule.run(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::TypeError);
        assert_eq!(errors[0].message(), "Value '1' is no string!");
    }

    #[test]
    fn test_missing_fields_match_nothing() {
        let record = Record::new().with("a", 1);
        let rule = FieldRule::new(["b", "c"], vec![no_blank().boxed()]);
        assert!(rule.run(&record).is_empty());
    }

    #[test]
    fn test_record_order_wins_over_rule_order() {
        // The rule lists the fields backwards; errors still follow record order.
        let record = Record::new().with("first", Value::Null).with("second", 7);
        let rule = FieldRule::new(["second", "first"], vec![is_string().boxed()]);

        let errors = rule.run(&record);
        let messages: Vec<&str> = errors.iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            vec!["Value 'null' is no string!", "Value '7' is no string!"]
        );
    }

    #[test]
    fn test_validators_run_in_listed_order() {
        let record = Record::new().with("a", Value::Null);
        let rule = FieldRule::new(["a"], vec![no_blank().boxed(), is_string().boxed()]);

        let errors = rule.run(&record);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind(), ErrorKind::Blank);
        assert_eq!(errors[1].kind(), ErrorKind::TypeError);
    }

    #[test]
    fn test_duplicate_field_names_do_not_double_check() {
        let record = Record::new().with("a", Value::Null);
        let rule = FieldRule::new(["a", "a"], vec![no_blank().boxed()]);
        assert_eq!(rule.run(&record).len(), 1);
    }

    #[test]
    fn test_rules_run_in_supplied_order() {
        let record = Record::new().with("name", "").with("age", Value::Null);
        let rules = [
            FieldRule::new(["age"], vec![is_number().boxed()]),
            FieldRule::new(["name"], vec![no_blank().boxed()]),
        ];

        let errors = validate(&record, &rules);
        assert_eq!(errors.len(), 2);
        // First rule's errors come first even though "name" precedes "age"
        // in the record.
        assert_eq!(errors[0].message(), "Value 'null' is no number!");
        assert_eq!(errors[1].message(), "Value '' is blank!");
    }

    #[test]
    fn test_empty_rules_yield_no_errors() {
        let record = Record::new().with("a", Value::Null);
        assert!(validate(&record, &[]).is_empty());
    }

    #[test]
    fn test_rule_with_no_validators_yields_no_errors() {
        let record = Record::new().with("a", Value::Null);
        let rule = FieldRule::new(["a"], vec![]);
        assert!(rule.run(&record).is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let record = Record::new().with("name", "").with("age", "thirty");
        let rules = [
            FieldRule::new(["name"], vec![no_blank().boxed(), is_string().boxed()]),
            FieldRule::new(["age"], vec![no_blank().boxed(), is_number().boxed()]),
        ];
        assert_eq!(validate(&record, &rules), validate(&record, &rules));
    }
}
