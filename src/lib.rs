#![doc = include_str!("../README.md")]

mod config;
mod error;
mod evaluate;
pub mod path;
mod trace;
mod types;

pub use error::GatecheckError;
pub use path::{PathError, PropertyPath, Segment};
pub use types::{
    property, ConfigError, EvaluationReport, Operator, PropertyRule, Reference, Rule, RuleSet,
    RuleSetBuilder, Satisfy, UnknownOperator, Value,
};

/// Evaluate `ruleset` against `reference`.
///
/// Same as [`RuleSet::evaluate()`]: `Ok(None)` when the rule set has no rule
/// list, otherwise the aggregated outcome.
///
/// # Errors
///
/// Returns [`ConfigError`] when a rule is misconfigured.
pub fn evaluate(ruleset: &RuleSet, reference: &Reference) -> Result<Option<bool>, ConfigError> {
    ruleset.evaluate(reference)
}
