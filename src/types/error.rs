use thiserror::Error;

use crate::path::PathError;

/// A rule set is misconfigured. Evaluation stops at the first such rule.
///
/// Every variant carries the offending rule's position and a rendering of
/// the rule itself for diagnostics.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("property not specified for rule {index}: {rule}")]
    MissingProperty { index: usize, rule: String },

    #[error("unknown comparison '{op}' for rule {index}: {rule}")]
    UnknownOperator {
        index: usize,
        op: String,
        rule: String,
    },

    #[error(
        "comparison \"crosses\" selected for rule {index}, but no function supplied to return the previous value: {rule}"
    )]
    MissingPreviousValueFn { index: usize, rule: String },

    #[error("invalid property path '{path}' for rule {index}: {source}")]
    InvalidPath {
        index: usize,
        path: String,
        rule: String,
        source: PathError,
    },
}

impl ConfigError {
    /// Position of the offending rule in the rule list.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            ConfigError::MissingProperty { index, .. }
            | ConfigError::UnknownOperator { index, .. }
            | ConfigError::MissingPreviousValueFn { index, .. }
            | ConfigError::InvalidPath { index, .. } => *index,
        }
    }

    /// The offending rule as written.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            ConfigError::MissingProperty { rule, .. }
            | ConfigError::UnknownOperator { rule, .. }
            | ConfigError::MissingPreviousValueFn { rule, .. }
            | ConfigError::InvalidPath { rule, .. } => rule,
        }
    }
}
