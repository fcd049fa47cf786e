use std::fmt;

use super::satisfy::Satisfy;

/// Pass counts per aggregation bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub(crate) normal_passed: usize,
    pub(crate) normal_total: usize,
    pub(crate) required_passed: usize,
    pub(crate) required_total: usize,
}

impl Tally {
    pub(crate) fn record(&mut self, required: bool, passed: bool) {
        let (passed_count, total) = if required {
            (&mut self.required_passed, &mut self.required_total)
        } else {
            (&mut self.normal_passed, &mut self.normal_total)
        };
        *total += 1;
        if passed {
            *passed_count += 1;
        }
    }

    pub(crate) fn required_satisfied(&self) -> bool {
        self.required_passed == self.required_total
    }

    /// With no normal rules the bucket is vacuously satisfied in both modes.
    pub(crate) fn normal_satisfied(&self, satisfy: Satisfy) -> bool {
        if self.normal_total == 0 {
            return true;
        }
        match satisfy {
            Satisfy::All => self.normal_passed == self.normal_total,
            Satisfy::Any => self.normal_passed > 0,
        }
    }

    pub(crate) fn outcome(&self, satisfy: Satisfy) -> bool {
        self.required_satisfied() && self.normal_satisfied(satisfy)
    }
}

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::ruleset::RuleSet::evaluate_detailed).
///
/// Contains the outcome, the per-rule results in rule order, the pass
/// counts of both buckets and the diagnostic trace.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    outcome: Option<bool>,
    rule_results: Vec<bool>,
    tally: Tally,
    trace: String,
}

impl EvaluationReport {
    pub(crate) fn new(outcome: bool, rule_results: Vec<bool>, tally: Tally, trace: String) -> Self {
        Self {
            outcome: Some(outcome),
            rule_results,
            tally,
            trace,
        }
    }

    /// Report for a rule set without a rule list.
    pub(crate) fn without_rules() -> Self {
        Self {
            outcome: None,
            rule_results: Vec::new(),
            tally: Tally::default(),
            trace: String::new(),
        }
    }

    /// The outcome, same as [`RuleSet::evaluate()`](super::ruleset::RuleSet::evaluate).
    /// `None` when no rule list was configured.
    #[must_use]
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    /// Result of every rule, in rule order.
    #[must_use]
    pub fn rule_results(&self) -> &[bool] {
        &self.rule_results
    }

    #[must_use]
    pub fn normal_passed(&self) -> usize {
        self.tally.normal_passed
    }

    #[must_use]
    pub fn normal_total(&self) -> usize {
        self.tally.normal_total
    }

    #[must_use]
    pub fn required_passed(&self) -> usize {
        self.tally.required_passed
    }

    #[must_use]
    pub fn required_total(&self) -> usize {
        self.tally.required_total
    }

    /// The diagnostic trace, as handed to the log callback.
    #[must_use]
    pub fn trace(&self) -> &str {
        &self.trace
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(outcome) => write!(f, "outcome: {outcome}")?,
            None => write!(f, "outcome: none")?,
        }
        write!(
            f,
            ", normal: {}/{}, required: {}/{}",
            self.tally.normal_passed,
            self.tally.normal_total,
            self.tally.required_passed,
            self.tally.required_total,
        )?;
        Ok(())
    }
}
