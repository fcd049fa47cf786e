mod error;
mod evaluation_report;
mod operator;
mod reference;
mod rule;
mod ruleset;
mod satisfy;
mod value;

pub use error::ConfigError;
pub(crate) use evaluation_report::Tally;
pub use evaluation_report::EvaluationReport;
pub use operator::{Operator, UnknownOperator};
pub use reference::Reference;
pub use rule::{property, PropertyRule, Rule};
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use satisfy::Satisfy;
pub use value::Value;
