//! Property-based tests for record validation

use fieldcheck::prelude::*;
use fieldcheck::Value as FieldValue;
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Bool),
        (-1000i32..1000).prop_map(FieldValue::from),
        "[a-z]{0,8}".prop_map(FieldValue::from),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    prop::collection::vec(("[a-e]", arb_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

type RuleSpec = (Vec<String>, Vec<u8>);

fn build_rule(spec: &RuleSpec) -> FieldRule {
    let validators = spec
        .1
        .iter()
        .map(|tag| match tag % 3 {
            0 => no_blank().boxed(),
            1 => is_string().boxed(),
            _ => is_number().boxed(),
        })
        .collect();
    FieldRule::new(spec.0.iter().cloned(), validators)
}

fn build_rules(specs: &[RuleSpec]) -> Vec<FieldRule> {
    specs.iter().map(build_rule).collect()
}

fn arb_rule_specs() -> impl Strategy<Value = Vec<RuleSpec>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-e]", 0..4),
            prop::collection::vec(0u8..3, 0..4),
        ),
        0..4,
    )
}

proptest! {
    #[test]
    fn prop_validate_is_idempotent(record in arb_record(), specs in arb_rule_specs()) {
        let rules = build_rules(&specs);
        prop_assert_eq!(validate(&record, &rules), validate(&record, &rules));
    }

    #[test]
    fn prop_errors_are_the_concatenation_of_per_rule_runs(
        record in arb_record(),
        specs in arb_rule_specs(),
    ) {
        let rules = build_rules(&specs);

        let mut concatenated = Vec::new();
        for rule in &rules {
            concatenated.extend(rule.run(&record));
        }

        prop_assert_eq!(validate(&record, &rules), concatenated);
    }

    #[test]
    fn prop_disjoint_rules_contribute_nothing(record in arb_record()) {
        // Record field names are drawn from a-e; these never match.
        let rules = [FieldRule::new(
            ["x", "y", "z"],
            vec![no_blank().boxed(), is_string().boxed(), is_number().boxed()],
        )];
        prop_assert!(validate(&record, &rules).is_empty());
    }

    #[test]
    fn prop_non_empty_strings_pass_blank_and_string_checks(
        pairs in prop::collection::vec(("[a-e]", "[a-z]{1,8}"), 0..6),
    ) {
        let record: Record = pairs.into_iter().collect();
        let fields: Vec<String> = record.iter().map(|(name, _)| name.to_string()).collect();
        let rules = [FieldRule::new(
            fields,
            vec![no_blank().boxed(), is_string().boxed()],
        )];
        prop_assert!(validate(&record, &rules).is_empty());
    }

    #[test]
    fn prop_error_count_is_bounded_by_checks_performed(
        record in arb_record(),
        specs in arb_rule_specs(),
    ) {
        let rules = build_rules(&specs);
        let errors = validate(&record, &rules);

        // Each validator reports zero or one error per checked field.
        let max: usize = specs
            .iter()
            .map(|(fields, tags)| {
                let matching = record
                    .iter()
                    .filter(|(name, _)| fields.iter().any(|f| f.as_str() == *name))
                    .count();
                matching * tags.len()
            })
            .sum();

        prop_assert!(errors.len() <= max);
    }

    #[test]
    fn prop_validation_never_mutates_the_record(
        record in arb_record(),
        specs in arb_rule_specs(),
    ) {
        let before = record.clone();
        let rules = build_rules(&specs);
        let _ = validate(&record, &rules);
        prop_assert_eq!(record, before);
    }
}
