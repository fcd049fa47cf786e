use thiserror::Error;

use crate::ConfigError;

/// Unified error type covering configuration, JSON decoding, and I/O.
///
/// Returned by the loading conveniences
/// [`RuleSetBuilder::from_json()`](crate::RuleSetBuilder::from_json) and
/// [`RuleSetBuilder::from_file()`](crate::RuleSetBuilder::from_file).
#[derive(Debug, Error)]
pub enum GatecheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
