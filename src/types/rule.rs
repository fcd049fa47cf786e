use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::operator::Operator;
use super::value::Value;

/// One comparison to check against the reference.
///
/// Usually created with [`property()`] or loaded from JSON via
/// [`RuleSetBuilder::from_json()`](super::RuleSetBuilder::from_json).
/// Deserializing a single rule applies the same rules as the rule-set
/// loader: `required` is read by truthiness, and a missing property or an
/// unknown operator fails with the [`ConfigError`](super::ConfigError) message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Dotted path into the reference, optionally with one `[]` marker.
    pub property: String,
    pub op: Operator,
    /// Operand to compare against. `Null` for unary operators.
    pub value: Value,
    /// Required rules must pass whatever the satisfy mode.
    pub required: bool,
}

impl Rule {
    #[must_use]
    pub fn new(property: &str, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            property: property.to_owned(),
            op,
            value: value.into(),
            required: false,
        }
    }

    #[must_use]
    pub fn unary(property: &str, op: Operator) -> Self {
        Self::new(property, op, Value::Null)
    }

    /// Mark this rule as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property.is_empty() {
            write!(f, "<no property>")?;
        } else {
            write!(f, "{}", self.property)?;
        }
        write!(f, " {}", self.op)?;
        if !self.op.is_unary() {
            write!(f, " {}", self.value)?;
        }
        if self.required {
            write!(f, " (required)")?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        crate::config::load_rule(0, &json).map_err(serde::de::Error::custom)
    }
}

/// Intermediate builder for rules on one property.
/// Created by [`property()`]; each operator method produces a [`Rule`].
#[derive(Debug, Clone)]
pub struct PropertyRule {
    path: String,
}

macro_rules! binary_ops {
    ($($(#[$doc:meta])* $method:ident => $op:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $method(self, value: impl Into<Value>) -> Rule {
                Rule {
                    property: self.path,
                    op: Operator::$op,
                    value: value.into(),
                    required: false,
                }
            }
        )*
    };
}

impl PropertyRule {
    binary_ops! {
        eq => Eq,
        neq => Neq,
        gt => Gt,
        gte => Gte,
        lt => Lt,
        lte => Lte,
        starts_with => StartsWith,
        ends_with => EndsWith,
        contains => Contains,
        all => All,
        some => Some,
        none => None,
        /// Upward crossing of the given threshold; needs a previous-value function.
        crosses => Crosses,
    }

    #[must_use]
    pub fn present(self) -> Rule {
        Rule::unary(&self.path, Operator::Present)
    }

    #[must_use]
    pub fn absent(self) -> Rule {
        Rule::unary(&self.path, Operator::Absent)
    }
}

#[must_use]
pub fn property(path: &str) -> PropertyRule {
    PropertyRule {
        path: path.to_owned(),
    }
}
