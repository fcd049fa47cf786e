//! Human-readable evaluation trace handed to the log callback.

use std::fmt::Write;

use crate::types::Tally;
use crate::{Rule, Satisfy, Value};

#[derive(Debug, Default)]
pub(crate) struct Trace {
    text: String,
}

// Writing into a `String` cannot fail, so the `fmt::Result`s below are dropped.
impl Trace {
    pub(crate) fn comparison(
        &mut self,
        index: usize,
        rule: &Rule,
        resolved: &Value,
        target: &Value,
        passed: bool,
    ) {
        let property = &rule.property;
        let _ = if rule.op.is_unary() {
            writeln!(
                self.text,
                "({index}) {property} ({resolved}) is {}? {passed}",
                rule.op
            )
        } else {
            writeln!(
                self.text,
                "({index}) {property} ({resolved}) {} {target}? {passed}",
                rule.op
            )
        };
    }

    pub(crate) fn crossing(
        &mut self,
        index: usize,
        property: &str,
        previous: &Value,
        current: &Value,
        threshold: &Value,
        passed: bool,
    ) {
        let _ = writeln!(
            self.text,
            "({index}) {property} was {previous} and became {current}. crossed {threshold}? {passed}"
        );
    }

    pub(crate) fn summary(&mut self, tally: &Tally, satisfy: Satisfy, outcome: bool) {
        let mut parts = Vec::with_capacity(2);
        if tally.normal_total > 0 {
            parts.push(format!(
                "Passed {} / {} (need {satisfy}, {})",
                tally.normal_passed,
                tally.normal_total,
                pass_fail(tally.normal_satisfied(satisfy)),
            ));
        }
        if tally.required_total > 0 {
            parts.push(format!(
                "{} / {} required conditions ({})",
                tally.required_passed,
                tally.required_total,
                pass_fail(tally.required_satisfied()),
            ));
        }
        let verdict = if outcome { "PASS" } else { "FAIL" };
        if parts.is_empty() {
            let _ = write!(self.text, "({verdict})");
        } else {
            let _ = write!(self.text, "{} ({verdict})", parts.join(", and "));
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}
