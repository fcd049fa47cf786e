//! Loading rule sets from JSON configurations.
//!
//! The shape is `{"rules": [...], "satisfy": "ALL" | "ANY"}` with rules of
//! the form `{"property", "op", "value", "required"}`. Loading is lenient
//! about data and strict about shape: a missing `rules` array means "no
//! rules", but a rule without a property or with an unknown operator is a
//! [`ConfigError`].

use serde_json::Value as Json;

use crate::{ConfigError, Operator, Rule, Satisfy, Value};

#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub(crate) rules: Option<Vec<Rule>>,
    pub(crate) satisfy: Satisfy,
}

pub(crate) fn load(json: &Json) -> Result<LoadedConfig, ConfigError> {
    let satisfy = json
        .get("satisfy")
        .and_then(Json::as_str)
        .map(Satisfy::from_name)
        .unwrap_or_default();

    let rules = match json.get("rules") {
        Some(Json::Array(raw_rules)) => Some(
            raw_rules
                .iter()
                .enumerate()
                .map(|(index, raw)| load_rule(index, raw))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        _ => None,
    };

    tracing::debug!(
        rules = rules.as_ref().map(Vec::len),
        %satisfy,
        "loaded rule configuration"
    );

    Ok(LoadedConfig { rules, satisfy })
}

pub(crate) fn load_rule(index: usize, raw: &Json) -> Result<Rule, ConfigError> {
    let property = match raw.get("property").and_then(Json::as_str) {
        Some(property) if !property.is_empty() => property.to_owned(),
        _ => {
            return Err(ConfigError::MissingProperty {
                index,
                rule: raw.to_string(),
            })
        }
    };

    let op_name = match raw.get("op") {
        Some(Json::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let op = op_name
        .parse::<Operator>()
        .map_err(|_| ConfigError::UnknownOperator {
            index,
            op: op_name.clone(),
            rule: raw.to_string(),
        })?;

    let value = raw.get("value").cloned().map(Value::from).unwrap_or_default();
    let required = raw
        .get("required")
        .cloned()
        .map(Value::from)
        .is_some_and(|required| required.is_truthy());

    Ok(Rule {
        property,
        op,
        value,
        required,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::property;

    #[test]
    fn loads_rules_in_order() {
        let config = load(&json!({
            "rules": [
                {"op": "eq", "property": "text", "value": "Monday"},
                {"op": "present", "property": "nested.val", "required": true},
                {"op": "ne", "property": "nested.val", "value": "5"}
            ]
        }))
        .unwrap();

        assert_eq!(
            config.rules.unwrap(),
            vec![
                property("text").eq("Monday"),
                property("nested.val").present().required(),
                property("nested.val").neq("5"),
            ]
        );
        assert_eq!(config.satisfy, Satisfy::Any);
    }

    #[test]
    fn missing_rules_is_none() {
        assert!(load(&json!({})).unwrap().rules.is_none());
        assert!(load(&json!({"rules": "nope"})).unwrap().rules.is_none());
        assert!(load(&json!({"rules": {"0": {}}})).unwrap().rules.is_none());
        assert!(load(&json!(null)).unwrap().rules.is_none());
    }

    #[test]
    fn empty_rules_is_some() {
        let config = load(&json!({"rules": []})).unwrap();
        assert_eq!(config.rules, Some(vec![]));
    }

    #[test]
    fn satisfy_is_lenient() {
        let all = load(&json!({"rules": [], "satisfy": "ALL"})).unwrap();
        assert_eq!(all.satisfy, Satisfy::All);
        let odd = load(&json!({"rules": [], "satisfy": "MOST"})).unwrap();
        assert_eq!(odd.satisfy, Satisfy::Any);
        let wrong_type = load(&json!({"rules": [], "satisfy": 1})).unwrap();
        assert_eq!(wrong_type.satisfy, Satisfy::Any);
    }

    #[test]
    fn missing_property_is_an_error() {
        let err = load(&json!({"rules": [
            {"op": "eq", "property": "a", "value": 1},
            {"op": "eq", "value": 1}
        ]}))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingProperty { index: 1, .. }));
        assert_eq!(err.rule(), r#"{"op":"eq","value":1}"#);
    }

    #[test]
    fn empty_or_non_string_property_is_an_error() {
        for raw in [json!({"op": "eq", "property": ""}), json!({"op": "eq", "property": 3})] {
            let err = load(&json!({ "rules": [raw] })).unwrap_err();
            assert!(matches!(err, ConfigError::MissingProperty { index: 0, .. }));
        }
    }

    #[test]
    fn unknown_operator_is_an_error() {
        let err = load(&json!({"rules": [{"op": "between", "property": "a"}]})).unwrap_err();
        match err {
            ConfigError::UnknownOperator { index, op, .. } => {
                assert_eq!(index, 0);
                assert_eq!(op, "between");
            }
            other => panic!("expected UnknownOperator, got {other:?}"),
        }
    }

    #[test]
    fn missing_operator_is_an_error() {
        let err = load(&json!({"rules": [{"property": "a"}]})).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOperator { ref op, .. } if op.is_empty()));
    }

    #[test]
    fn required_uses_truthiness() {
        let config = load(&json!({"rules": [
            {"op": "present", "property": "a", "required": 1},
            {"op": "present", "property": "b", "required": ""},
            {"op": "present", "property": "c", "required": "yes"}
        ]}))
        .unwrap();
        let required: Vec<bool> = config.rules.unwrap().iter().map(|r| r.required).collect();
        assert_eq!(required, vec![true, false, true]);
    }
}
