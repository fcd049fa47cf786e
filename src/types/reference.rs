use std::collections::BTreeMap;

use super::Value;

/// The object under test: a read-only tree of named fields.
///
/// Built either from JSON or field by field with dot-separated paths like
/// `"user.profile.age"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    root: Value,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            root: Value::Map(BTreeMap::new()),
        }
    }
}

impl Reference {
    /// Create an empty reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value at a dot-separated path. Creates intermediate maps as needed.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Insert a value at a dot-separated path (mutable reference version).
    ///
    /// Any non-map value met along the way is replaced by a map.
    pub fn insert(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        Self::insert_recursive(&mut self.root, &segments, value);
    }

    /// Look up a value by plain dot-separated path.
    ///
    /// Numeric segments index into lists. Returns `None` if any segment is
    /// missing. For `[]` expansion use [`PropertyPath`](crate::PropertyPath).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |current, key| current.child(key))
    }

    /// The root value the paths are resolved against.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Parse a reference from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the input is not valid JSON.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from(json))
    }

    fn insert_recursive(node: &mut Value, segments: &[&str], value: Value) {
        if !matches!(node, Value::Map(_)) {
            *node = Value::Map(BTreeMap::new());
        }
        let Value::Map(map) = node else {
            return;
        };
        match segments {
            [] => {}
            [last] => {
                map.insert((*last).to_owned(), value);
            }
            [first, rest @ ..] => {
                let entry = map
                    .entry((*first).to_owned())
                    .or_insert_with(|| Value::Map(BTreeMap::new()));
                Self::insert_recursive(entry, rest, value);
            }
        }
    }
}

impl From<Value> for Reference {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl From<serde_json::Value> for Reference {
    fn from(json: serde_json::Value) -> Self {
        Self {
            root: Value::from(json),
        }
    }
}
