
use gatecheck::{property, Reference, Rule, RuleSetBuilder, Value};
use proptest::prelude::*;
use strategies::arb_value;

/// Generate a property path from a small alphabet to increase collisions.
fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("x".to_owned()),
        Just("a.b".to_owned()),
        Just("a.c".to_owned()),
        Just("items[]".to_owned()),
        Just("items[].b".to_owned()),
        Just("items[0]".to_owned()),
    ]
}

/// Generate a rule with any non-crossing operator.
fn arb_any_rule() -> impl Strategy<Value = Rule> {
    (arb_path(), arb_value(), 0_u8..14).prop_map(|(path, value, op)| {
        let p = property(&path);
        match op {
            0 => p.eq(value),
            1 => p.neq(value),
            2 => p.gt(value),
            3 => p.gte(value),
            4 => p.lt(value),
            5 => p.lte(value),
            6 => p.starts_with(value),
            7 => p.ends_with(value),
            8 => p.contains(value),
            9 => p.present(),
            10 => p.absent(),
            11 => p.all(value),
            12 => p.some(value),
            _ => p.none(value),
        }
    })
}

fn arb_any_reference() -> impl Strategy<Value = Reference> {
    (arb_value(), arb_value(), arb_value()).prop_map(|(x, a, items)| {
        Reference::new()
            .set("x", x)
            .set("a", a)
            .set("items", items)
    })
}

proptest! {
    /// Evaluation never panics and never errors for well-formed rules.
    #[test]
    fn eval_never_panics(rule in arb_any_rule(), reference in arb_any_reference()) {
        let ruleset = RuleSetBuilder::new().rule(rule).build();
        prop_assert!(ruleset.evaluate(&reference).unwrap().is_some());
    }

    /// present and absent are complements for every value.
    #[test]
    fn present_absent_complement(path in arb_path(), reference in arb_any_reference()) {
        let outcome = |rule: Rule| {
            RuleSetBuilder::new().rule(rule).build().evaluate(&reference).unwrap()
        };
        let present = outcome(property(&path).present());
        let absent = outcome(property(&path).absent());
        prop_assert_eq!(present.map(|p| !p), absent);
    }

    /// some and none are complements whenever the value is a list.
    #[test]
    fn some_none_complement(
        items in prop::collection::vec(arb_value(), 0..6),
        target in arb_value(),
    ) {
        let reference = Reference::new().set("items", Value::List(items));
        let outcome = |rule: Rule| {
            RuleSetBuilder::new().rule(rule).build().evaluate(&reference).unwrap()
        };
        let some = outcome(property("items").some(target.clone()));
        let none = outcome(property("items").none(target));
        prop_assert_eq!(some.map(|p| !p), none);
    }

    /// Without a bool alias in play, neq is the negation of eq.
    #[test]
    fn neq_negates_eq(value in arb_value(), target in arb_value()) {
        prop_assume!(!matches!(value, Value::Bool(_)));
        let reference = Reference::new().set("x", value);
        let outcome = |rule: Rule| {
            RuleSetBuilder::new().rule(rule).build().evaluate(&reference).unwrap()
        };
        let eq = outcome(property("x").eq(target.clone()));
        let neq = outcome(property("x").neq(target));
        prop_assert_eq!(eq.map(|p| !p), neq);
    }

    /// A missing rule list is always the null sentinel.
    #[test]
    fn without_rules_is_none(reference in arb_any_reference()) {
        let ruleset = RuleSetBuilder::without_rules().build();
        prop_assert_eq!(ruleset.evaluate(&reference).unwrap(), None);
    }
}
