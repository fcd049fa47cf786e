use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comparison operators a rule can apply.
///
/// The serialized names are the wire names used in rule configurations.
/// `ne` is accepted for [`Operator::Neq`] and `empty` for [`Operator::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Eq,
    #[serde(alias = "ne")]
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    StartsWith,
    EndsWith,
    Contains,
    Present,
    #[serde(alias = "empty")]
    Absent,
    /// Every element of a list strictly equals the target.
    All,
    /// At least one element of a list strictly equals the target.
    Some,
    /// No element of a list strictly equals the target.
    None,
    /// The target lies above the previous value and at or below the current one.
    Crosses,
}

/// Returned when an operator name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// Canonical wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::Contains => "contains",
            Operator::Present => "present",
            Operator::Absent => "absent",
            Operator::All => "all",
            Operator::Some => "some",
            Operator::None => "none",
            Operator::Crosses => "crosses",
        }
    }

    /// Unary operators ignore the rule's value.
    #[must_use]
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Present | Operator::Absent)
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "eq" => Operator::Eq,
            "ne" | "neq" => Operator::Neq,
            "gt" => Operator::Gt,
            "gte" => Operator::Gte,
            "lt" => Operator::Lt,
            "lte" => Operator::Lte,
            "startsWith" => Operator::StartsWith,
            "endsWith" => Operator::EndsWith,
            "contains" => Operator::Contains,
            "present" => Operator::Present,
            "empty" | "absent" => Operator::Absent,
            "all" => Operator::All,
            "some" => Operator::Some,
            "none" => Operator::None,
            "crosses" => Operator::Crosses,
            other => return Err(UnknownOperator(other.to_owned())),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
