//! Property paths: dotted field access with an optional `[]` expansion.
//!
//! ```text
//! nested.val          plain lookup
//! items.0.name        numeric keys index into lists
//! items[0].name       bracketed index, same as above
//! lunches[].type      map `type` over every element of `lunches`
//! months[]            every element of `months` as-is
//! ```

mod error;
mod grammar;

use std::fmt;

pub use error::PathError;

use crate::Value;

/// One step of a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Field name, or a decimal list index written with a dot.
    Key(String),
    /// Bracketed list index: `[3]`.
    Index(usize),
}

/// A parsed property path.
///
/// `head` locates a value in the reference. When `expand` is present the
/// value found at `head` is treated as a list and `expand` is resolved
/// inside every element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    head: Vec<Segment>,
    expand: Option<Vec<Segment>>,
}

/// Parse a property path.
///
/// # Errors
///
/// Returns [`PathError`] for empty segments, unbalanced brackets, or more
/// than one `[]` marker.
pub fn parse(input: &str) -> Result<PropertyPath, PathError> {
    use winnow::Parser;
    grammar::property_path
        .parse(input)
        .map_err(|e| PathError::new(e.to_string()))
}

impl PropertyPath {
    /// Segments before the `[]` marker (or the whole path).
    #[must_use]
    pub fn head(&self) -> &[Segment] {
        &self.head
    }

    /// Segments after the `[]` marker, if the path expands a list.
    #[must_use]
    pub fn expand(&self) -> Option<&[Segment]> {
        self.expand.as_deref()
    }

    /// Resolve this path against `root`.
    ///
    /// Missing segments give [`Value::Null`]. An expanding path gives one
    /// entry per list element (`Null` where the tail misses). If the value
    /// at the head is not a list it is returned unchanged, so set operators
    /// see a non-list and fail.
    #[must_use]
    pub fn resolve(&self, root: &Value) -> Value {
        let top = lookup(root, &self.head);
        match (&self.expand, top) {
            (Some(tail), Some(Value::List(items))) => Value::List(
                items
                    .iter()
                    .map(|item| lookup(item, tail).cloned().unwrap_or_default())
                    .collect(),
            ),
            (_, found) => found.cloned().unwrap_or_default(),
        }
    }
}

fn lookup<'a>(root: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| match segment {
            Segment::Key(key) => current.child(key),
            Segment::Index(index) => current.element(*index),
        })
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

fn write_segments(
    f: &mut fmt::Formatter<'_>,
    segments: &[Segment],
    leading: bool,
) -> fmt::Result {
    for (i, segment) in segments.iter().enumerate() {
        if matches!(segment, Segment::Key(_)) && (i > 0 || leading) {
            write!(f, ".")?;
        }
        write!(f, "{segment}")?;
    }
    Ok(())
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_segments(f, &self.head, false)?;
        if let Some(tail) = &self.expand {
            write!(f, "[]")?;
            write_segments(f, tail, true)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reference;

    fn key(s: &str) -> Segment {
        Segment::Key(s.to_owned())
    }

    fn lunches() -> Reference {
        Reference::from_json(
            r#"{
                "months": ["January", "February"],
                "lunches": [
                    {"type": "veg", "qty": 1},
                    {"type": "any", "qty": 2},
                    {"qty": 3}
                ],
                "nested": {"val": 6}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_plain_path() {
        let path = parse("a.b.c").unwrap();
        assert_eq!(path.head(), &[key("a"), key("b"), key("c")]);
        assert_eq!(path.expand(), None);
    }

    #[test]
    fn parse_expanding_path() {
        let path = parse("lunches[].type").unwrap();
        assert_eq!(path.head(), &[key("lunches")]);
        assert_eq!(path.expand(), Some(&[key("type")][..]));
    }

    #[test]
    fn parse_expansion_without_tail() {
        let path = parse("months[]").unwrap();
        assert_eq!(path.head(), &[key("months")]);
        assert_eq!(path.expand(), Some(&[][..]));
    }

    #[test]
    fn parse_bracket_index() {
        let path = parse("items[2].name").unwrap();
        assert_eq!(path.head(), &[key("items"), Segment::Index(2), key("name")]);
    }

    #[test]
    fn parse_rejects_malformed() {
        let malformed = [
            "", "a..b", "a.", ".a", "a[", "a[x]", "a]b", "a[]b", "a[][]", "a[].b[]",
        ];
        for bad in malformed {
            assert!(parse(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn display_round_trips_source() {
        let sources = ["a.b.c", "lunches[].type", "months[]", "items[2].name", "a[].b[0].c"];
        for source in sources {
            assert_eq!(parse(source).unwrap().to_string(), source);
        }
    }

    #[test]
    fn resolve_plain() {
        let reference = lunches();
        let value = parse("nested.val").unwrap().resolve(reference.as_value());
        assert_eq!(value, Value::Int(6));
    }

    #[test]
    fn resolve_missing_is_null() {
        let reference = lunches();
        let value = parse("nested.other.deep")
            .unwrap()
            .resolve(reference.as_value());
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn resolve_expansion_keeps_length() {
        let reference = lunches();
        let value = parse("lunches[].type").unwrap().resolve(reference.as_value());
        assert_eq!(
            value,
            Value::List(vec![Value::from("veg"), Value::from("any"), Value::Null])
        );
    }

    #[test]
    fn resolve_expansion_without_tail_returns_elements() {
        let reference = lunches();
        let value = parse("months[]").unwrap().resolve(reference.as_value());
        assert_eq!(value, Value::from(vec!["January", "February"]));
    }

    #[test]
    fn resolve_expansion_of_non_list_is_passthrough() {
        let reference = lunches();
        let value = parse("nested.val[].x").unwrap().resolve(reference.as_value());
        assert_eq!(value, Value::Int(6));
        let value = parse("missing[].x").unwrap().resolve(reference.as_value());
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn resolve_indexed() {
        let reference = lunches();
        let root = reference.as_value();
        assert_eq!(parse("lunches[1].qty").unwrap().resolve(root), Value::Int(2));
        assert_eq!(parse("lunches.1.qty").unwrap().resolve(root), Value::Int(2));
        assert_eq!(parse("lunches[9].qty").unwrap().resolve(root), Value::Null);
    }
}
