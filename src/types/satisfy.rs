use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// How many of the normal (non-required) rules must pass.
///
/// Deserializes leniently through [`Satisfy::from_name`], like the rule-set
/// loader: anything other than `"ALL"` is [`Satisfy::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Satisfy {
    /// Every normal rule must pass.
    All,
    /// At least one normal rule must pass.
    #[default]
    Any,
}

impl Satisfy {
    /// Lenient parse used for loaded configurations: `"ALL"` in any case
    /// selects [`Satisfy::All`], everything else falls back to [`Satisfy::Any`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("all") {
            Satisfy::All
        } else {
            Satisfy::Any
        }
    }
}

impl<'de> Deserialize<'de> for Satisfy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(json.as_str().map(Satisfy::from_name).unwrap_or_default())
    }
}

impl fmt::Display for Satisfy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Satisfy::All => write!(f, "ALL"),
            Satisfy::Any => write!(f, "ANY"),
        }
    }
}
