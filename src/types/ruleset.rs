use std::fmt;

use super::error::ConfigError;
use super::evaluation_report::EvaluationReport;
use super::reference::Reference;
use super::rule::Rule;
use super::satisfy::Satisfy;
use super::value::Value;

pub(crate) type PreviousValueFn = dyn Fn(&Reference, &str) -> Value + Send + Sync;
pub(crate) type TransformValueFn = dyn Fn(&Value, &Reference, &str) -> Value + Send + Sync;
pub(crate) type LogFn = dyn Fn(&str) + Send + Sync;

/// Builder for constructing a [`RuleSet`].
///
/// # Example
///
/// ```
/// use gatecheck::{property, Reference, RuleSetBuilder, Satisfy};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule(property("user.age").gte(18_i64).required())
///     .rule(property("user.status").eq("active"))
///     .rule(property("user.roles[]").some("admin"))
///     .satisfy(Satisfy::Any)
///     .build();
///
/// let reference = Reference::new()
///     .set("user.age", 25_i64)
///     .set("user.status", "active");
///
/// assert_eq!(ruleset.evaluate(&reference).unwrap(), Some(true));
/// ```
pub struct RuleSetBuilder {
    rules: Option<Vec<Rule>>,
    satisfy: Satisfy,
    previous_value: Option<Box<PreviousValueFn>>,
    transform_value: Option<Box<TransformValueFn>>,
    log: Option<Box<LogFn>>,
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self {
            rules: Some(Vec::new()),
            satisfy: Satisfy::default(),
            previous_value: None,
            transform_value: None,
            log: None,
        }
    }
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder with no rule list at all. Evaluating the resulting
    /// [`RuleSet`] yields `None` instead of an outcome.
    #[must_use]
    pub fn without_rules() -> Self {
        Self {
            rules: None,
            ..Self::default()
        }
    }

    /// Append a rule. Rules are traced in the order they were added.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.get_or_insert_with(Vec::new).push(rule);
        self
    }

    /// Append several rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.get_or_insert_with(Vec::new).extend(rules);
        self
    }

    #[must_use]
    pub fn satisfy(mut self, satisfy: Satisfy) -> Self {
        self.satisfy = satisfy;
        self
    }

    /// Supply the previous value of a property; required by `crosses` rules.
    #[must_use]
    pub fn previous_value(
        mut self,
        f: impl Fn(&Reference, &str) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.previous_value = Some(Box::new(f));
        self
    }

    /// Compute each rule's comparison target from its raw value before
    /// comparing, e.g. to compare against another field named by the value.
    #[must_use]
    pub fn transform_value(
        mut self,
        f: impl Fn(&Value, &Reference, &str) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.transform_value = Some(Box::new(f));
        self
    }

    /// Receive the diagnostic trace once per evaluation.
    #[must_use]
    pub fn log(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log = Some(Box::new(f));
        self
    }

    /// Load rules and satisfy mode from a JSON configuration.
    ///
    /// Callbacks are not part of the JSON and are attached afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GatecheckError`](crate::GatecheckError) on malformed JSON
    /// or a misconfigured rule.
    pub fn from_json(input: &str) -> Result<Self, crate::GatecheckError> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from_json_value(&json)?)
    }

    /// Load rules and satisfy mode from an already parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a rule has no property or an unknown operator.
    pub fn from_json_value(json: &serde_json::Value) -> Result<Self, ConfigError> {
        let config = crate::config::load(json)?;
        Ok(Self {
            rules: config.rules,
            satisfy: config.satisfy,
            ..Self::default()
        })
    }

    /// Read a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GatecheckError`](crate::GatecheckError) on I/O, JSON, or
    /// configuration failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::GatecheckError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet {
            rules: self.rules,
            satisfy: self.satisfy,
            previous_value: self.previous_value,
            transform_value: self.transform_value,
            log: self.log,
        }
    }
}

/// An immutable rule set with its callbacks. Thread-safe and fine to share
/// behind `Arc`.
pub struct RuleSet {
    pub(crate) rules: Option<Vec<Rule>>,
    pub(crate) satisfy: Satisfy,
    pub(crate) previous_value: Option<Box<PreviousValueFn>>,
    pub(crate) transform_value: Option<Box<TransformValueFn>>,
    pub(crate) log: Option<Box<LogFn>>,
}

impl RuleSet {
    /// Evaluate this rule set against `reference`.
    ///
    /// Returns `Ok(None)` when the rule set has no rule list, otherwise
    /// whether the required and normal buckets are both satisfied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a rule without a property, with an
    /// unparsable path, or a `crosses` rule without a previous-value function.
    pub fn evaluate(&self, reference: &Reference) -> Result<Option<bool>, ConfigError> {
        Ok(self.evaluate_detailed(reference)?.outcome())
    }

    /// Evaluate with per-rule results, pass counts and the trace.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate()`](Self::evaluate).
    pub fn evaluate_detailed(
        &self,
        reference: &Reference,
    ) -> Result<EvaluationReport, ConfigError> {
        crate::evaluate::evaluate(self, reference)
    }

    /// The configured rules, or `None` if there is no rule list.
    #[must_use]
    pub fn rules(&self) -> Option<&[Rule]> {
        self.rules.as_deref()
    }

    #[must_use]
    pub fn satisfy_mode(&self) -> Satisfy {
        self.satisfy
    }
}

fn debug_fields(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    rules: Option<&[Rule]>,
    satisfy: Satisfy,
    callbacks: [bool; 3],
) -> fmt::Result {
    f.debug_struct(name)
        .field("rules", &rules)
        .field("satisfy", &satisfy)
        .field("previous_value", &callbacks[0])
        .field("transform_value", &callbacks[1])
        .field("log", &callbacks[2])
        .finish()
}

impl fmt::Debug for RuleSetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_fields(
            f,
            "RuleSetBuilder",
            self.rules.as_deref(),
            self.satisfy,
            [
                self.previous_value.is_some(),
                self.transform_value.is_some(),
                self.log.is_some(),
            ],
        )
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_fields(
            f,
            "RuleSet",
            self.rules.as_deref(),
            self.satisfy,
            [
                self.previous_value.is_some(),
                self.transform_value.is_some(),
                self.log.is_some(),
            ],
        )
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rules {
            Some(rules) => write!(
                f,
                "RuleSet({} rules, {} required, satisfy {})",
                rules.len(),
                rules.iter().filter(|r| r.required).count(),
                self.satisfy,
            ),
            None => write!(f, "RuleSet(no rules)"),
        }
    }
}
