use std::borrow::Cow;
use std::cmp::Ordering;

use crate::path;
use crate::trace::Trace;
use crate::types::Tally;
use crate::{ConfigError, EvaluationReport, Operator, Reference, Rule, RuleSet, Value};

pub(crate) fn evaluate(
    ruleset: &RuleSet,
    reference: &Reference,
) -> Result<EvaluationReport, ConfigError> {
    let Some(rules) = ruleset.rules.as_deref() else {
        tracing::debug!("rule set has no rule list, skipping evaluation");
        return Ok(EvaluationReport::without_rules());
    };

    let mut tally = Tally::default();
    let mut trace = Trace::default();
    let mut results = Vec::with_capacity(rules.len());

    for (index, rule) in rules.iter().enumerate() {
        let passed = eval_rule(ruleset, reference, index, rule, &mut trace)?;
        tracing::trace!(
            index,
            property = %rule.property,
            op = %rule.op,
            required = rule.required,
            passed,
            "rule evaluated"
        );
        tally.record(rule.required, passed);
        results.push(passed);
    }

    let outcome = tally.outcome(ruleset.satisfy);
    trace.summary(&tally, ruleset.satisfy, outcome);

    tracing::debug!(
        normal_passed = tally.normal_passed,
        normal_total = tally.normal_total,
        required_passed = tally.required_passed,
        required_total = tally.required_total,
        satisfy = %ruleset.satisfy,
        outcome,
        "rule set evaluated"
    );

    let trace = trace.into_string();
    if let Some(log) = &ruleset.log {
        log(&trace);
    }

    Ok(EvaluationReport::new(outcome, results, tally, trace))
}

fn eval_rule(
    ruleset: &RuleSet,
    reference: &Reference,
    index: usize,
    rule: &Rule,
    trace: &mut Trace,
) -> Result<bool, ConfigError> {
    if rule.property.is_empty() {
        return Err(ConfigError::MissingProperty {
            index,
            rule: rule.to_string(),
        });
    }

    let path = path::parse(&rule.property).map_err(|source| ConfigError::InvalidPath {
        index,
        path: rule.property.clone(),
        rule: rule.to_string(),
        source,
    })?;
    let resolved = path.resolve(reference.as_value());

    let target = match &ruleset.transform_value {
        Some(transform) => Cow::Owned(transform(&rule.value, reference, &rule.property)),
        None => Cow::Borrowed(&rule.value),
    };

    if rule.op == Operator::Crosses {
        let Some(previous_value) = &ruleset.previous_value else {
            return Err(ConfigError::MissingPreviousValueFn {
                index,
                rule: rule.to_string(),
            });
        };
        let previous = previous_value(reference, &rule.property);
        let passed = crosses(&previous, &resolved, &target);
        trace.crossing(index, &rule.property, &previous, &resolved, &target, passed);
        return Ok(passed);
    }

    let passed = compare(rule.op, &resolved, &target);
    trace.comparison(index, rule, &resolved, &target, passed);
    Ok(passed)
}

/// Apply a non-stateful operator. `Crosses` needs the previous value and is
/// handled by [`crosses`].
fn compare(op: Operator, resolved: &Value, target: &Value) -> bool {
    match op {
        Operator::Eq => {
            resolved.loose_eq(target) || bool_alias(resolved, target).is_some_and(|b| b)
        }
        Operator::Neq => {
            !resolved.loose_eq(target) || bool_alias(resolved, target).is_some_and(|b| !b)
        }
        Operator::Gt => resolved.loose_cmp(target) == Some(Ordering::Greater),
        Operator::Gte => matches!(
            resolved.loose_cmp(target),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Lt => resolved.loose_cmp(target) == Some(Ordering::Less),
        Operator::Lte => matches!(
            resolved.loose_cmp(target),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Operator::StartsWith => substring(resolved, target, |s, t| s.starts_with(t)),
        Operator::EndsWith => substring(resolved, target, |s, t| s.ends_with(t)),
        Operator::Contains => substring(resolved, target, |s, t| s.contains(t)),
        Operator::Present => resolved.is_truthy(),
        Operator::Absent => !resolved.is_truthy(),
        Operator::All => {
            list(resolved).is_some_and(|items| items.iter().all(|v| v.strict_eq(target)))
        }
        Operator::Some => {
            list(resolved).is_some_and(|items| items.iter().any(|v| v.strict_eq(target)))
        }
        Operator::None => {
            list(resolved).is_some_and(|items| !items.iter().any(|v| v.strict_eq(target)))
        }
        Operator::Crosses => false,
    }
}

/// A boolean compared against `"true"`/`"false"` (any case) is compared as
/// a boolean too. Returns whether the two booleans are equal.
fn bool_alias(resolved: &Value, target: &Value) -> Option<bool> {
    let (Value::Bool(actual), Value::String(alias)) = (resolved, target) else {
        return None;
    };
    let expected = if alias.eq_ignore_ascii_case("true") {
        true
    } else if alias.eq_ignore_ascii_case("false") {
        false
    } else {
        return None;
    };
    Some(*actual == expected)
}

fn substring(resolved: &Value, target: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
    if matches!(target, Value::Null) {
        return false;
    }
    test(&resolved.coerce_string(), &target.coerce_string())
}

fn list(value: &Value) -> Option<&[Value]> {
    match value {
        Value::List(items) => Some(items),
        _ => None,
    }
}

/// Upward crossing: `previous < threshold <= current`.
fn crosses(previous: &Value, current: &Value, threshold: &Value) -> bool {
    threshold.loose_cmp(previous) == Some(Ordering::Greater)
        && matches!(
            threshold.loose_cmp(current),
            Some(Ordering::Less | Ordering::Equal)
        )
}
