//! Ingestion of untyped JSON option documents.
//!
//! This is the only place where the flat/grouped shape is detected
//! structurally. Once parsed, the decision lives in the [`OptionSet`] variant.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::accessors::OptionAccessors;
use crate::error::OptionDataError;
use crate::key::OptionKey;
use crate::set::{OptionGroup, OptionSet};

/// Decide whether a list of JSON options is grouped.
///
/// Only the first element is inspected: the list is grouped when it is an
/// object carrying both a `group` and an `options` property. An empty list is
/// flat.
#[must_use]
pub fn is_grouped(values: &[Value]) -> bool {
    values
        .first()
        .and_then(Value::as_object)
        .is_some_and(|object| object.contains_key("group") && object.contains_key("options"))
}

impl OptionSet<Value> {
    /// Build an option set from a JSON array of options or groups.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not an array, or when it was
    /// detected as grouped and an element lacks a string `group` or an array
    /// of `options`.
    pub fn from_json(document: Value) -> Result<Self, OptionDataError> {
        let Value::Array(values) = document else {
            return Err(OptionDataError::NotAnArray {
                found: json_kind(&document),
            });
        };

        if !is_grouped(&values) {
            return Ok(Self::Flat(values));
        }

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| parse_group(index, value))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Grouped)
    }

    /// Parse `text` as JSON and build an option set from it.
    ///
    /// # Errors
    ///
    /// See [`OptionSet::from_json`]; invalid JSON is reported as
    /// [`OptionDataError::Json`].
    pub fn from_json_str(text: &str) -> Result<Self, OptionDataError> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_json(document)
    }
}

fn parse_group(index: usize, value: Value) -> Result<OptionGroup<Value>, OptionDataError> {
    let Value::Object(mut object) = value else {
        return Err(OptionDataError::MalformedGroup {
            index,
            reason: "expected an object",
        });
    };

    let group = match object.remove("group") {
        Some(Value::String(group)) => group,
        _ => {
            return Err(OptionDataError::MalformedGroup {
                index,
                reason: "`group` must be a string",
            });
        }
    };

    let options = match object.remove("options") {
        Some(Value::Array(options)) => options,
        _ => {
            return Err(OptionDataError::MalformedGroup {
                index,
                reason: "`options` must be an array",
            });
        }
    };

    Ok(OptionGroup { group, options })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Field names used to read labels, keys and disabled flags from object
/// options. Unset fields fall back to the option itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JsonFields {
    pub label: Option<String>,
    pub value: Option<String>,
    pub disabled: Option<String>,
}

/// Build accessors for JSON options according to `fields`.
///
/// Labels are string-coerced: strings are used verbatim, `null` becomes the
/// empty string and anything else uses its JSON representation. Keys keep
/// integers as [`OptionKey::Int`] and coerce everything else to text. When no
/// value field is configured, or an option lacks it, the key is derived from
/// the same source as the label.
#[must_use]
pub fn json_accessors(fields: &JsonFields) -> OptionAccessors<Value> {
    let label_field = fields.label.clone();
    let key_label_field = fields.label.clone();
    let value_field = fields.value.clone();

    let accessors = OptionAccessors::new(
        move |option: &Value| coerce_label(field_or_self(option, label_field.as_deref())),
        move |option: &Value| {
            let source = value_field
                .as_deref()
                .and_then(|field| option.as_object().and_then(|object| object.get(field)))
                .unwrap_or_else(|| field_or_self(option, key_label_field.as_deref()));
            coerce_key(source)
        },
    );

    match fields.disabled.clone() {
        Some(field) => accessors.with_disabled(move |option: &Value| {
            option
                .as_object()
                .and_then(|object| object.get(&field))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        }),
        None => accessors,
    }
}

fn field_or_self<'a>(option: &'a Value, field: Option<&str>) -> &'a Value {
    field
        .and_then(|field| option.as_object().and_then(|object: &Map<String, Value>| object.get(field)))
        .unwrap_or(option)
}

fn coerce_label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_key(value: &Value) -> OptionKey {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(int) => OptionKey::Int(int),
            None => OptionKey::Text(number.to_string()),
        },
        other => OptionKey::Text(coerce_label(other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_lists_are_flat() {
        assert!(!is_grouped(&[]));
    }

    #[test]
    fn flat_lists_are_not_grouped() {
        assert!(!is_grouped(&[json!("Apple"), json!("Banana")]));
        assert!(!is_grouped(&[json!({"label": "Apple", "value": 1})]));
        assert!(!is_grouped(&[json!(null), json!({"group": "g", "options": []})]));
        assert!(!is_grouped(&[json!({"group": "only a group key"})]));
    }

    #[test]
    fn first_element_with_group_and_options_is_grouped() {
        assert!(is_grouped(&[json!({"group": "Fruit", "options": ["Apple"]})]));
        assert!(is_grouped(&[json!({"group": 1, "options": null}), json!("x")]));
    }

    #[test]
    fn grouped_documents_parse_into_groups() {
        let set = OptionSet::from_json(json!([
            {"group": "Fruit", "options": ["Apple", "Banana"]},
            {"group": "Veg", "options": ["Carrot"]},
        ]))
        .expect("parse grouped");

        let OptionSet::Grouped(groups) = set else {
            panic!("expected grouped set");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].group, "Veg");
        assert_eq!(groups[1].options, vec![json!("Carrot")]);
    }

    #[test]
    fn non_array_documents_are_rejected() {
        let err = OptionSet::from_json(json!({"group": "x"})).unwrap_err();
        assert!(matches!(err, OptionDataError::NotAnArray { found: "an object" }));
    }

    #[test]
    fn malformed_later_groups_report_their_index() {
        let err = OptionSet::from_json(json!([
            {"group": "Fruit", "options": []},
            {"group": "Veg"},
        ]))
        .unwrap_err();
        assert!(matches!(err, OptionDataError::MalformedGroup { index: 1, .. }));
    }

    #[test]
    fn invalid_json_text_is_reported() {
        let err = OptionSet::from_json_str("[1, 2").unwrap_err();
        assert!(matches!(err, OptionDataError::Json(_)));
    }

    #[test]
    fn plain_values_are_their_own_label_and_key() {
        let accessors = json_accessors(&JsonFields::default());
        assert_eq!(accessors.label(&json!("Apple")), "Apple");
        assert_eq!(accessors.key(&json!("Apple")), OptionKey::from("Apple"));
        assert_eq!(accessors.label(&json!(42)), "42");
        assert_eq!(accessors.key(&json!(42)), OptionKey::Int(42));
    }

    #[test]
    fn object_fields_drive_label_key_and_disabled() {
        let fields = JsonFields {
            label: Some("name".into()),
            value: Some("id".into()),
            disabled: Some("archived".into()),
        };
        let accessors = json_accessors(&fields);
        let option = json!({"name": "Kiwi", "id": 9, "archived": true});

        assert_eq!(accessors.label(&option), "Kiwi");
        assert_eq!(accessors.key(&option), OptionKey::Int(9));
        assert!(accessors.is_disabled(&option));
        assert!(!accessors.is_disabled(&json!({"name": "Pear", "id": 10})));
    }

    #[test]
    fn missing_value_field_falls_back_to_label_source() {
        let fields = JsonFields {
            label: Some("name".into()),
            value: Some("id".into()),
            disabled: None,
        };
        let accessors = json_accessors(&fields);
        assert_eq!(
            accessors.key(&json!({"name": "Fig"})),
            OptionKey::from("Fig")
        );
    }
}
