// ABOUTME: Typed deserialization of tools/call arguments with tool-aware validation errors
// ABOUTME: Walks the input schema to report missing required fields by path; type mismatches are InvalidParameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};

use super::errors::ToolError;

/// Deserialize tool arguments into the tool's parameter struct
///
/// Absent arguments (`null`) are treated as `{}`. Unknown keys are ignored.
///
/// # Errors
///
/// Returns an `InvalidInput` error when the arguments do not match `T`
pub fn parse_args<T: DeserializeOwned>(tool_name: &str, args: Value) -> AppResult<T> {
    let args = match args {
        Value::Null => Value::Object(Map::new()),
        object @ Value::Object(_) => object,
        other => {
            return Err(ToolError::invalid_parameter(
                tool_name,
                "arguments",
                format!("expected an object, got {}", json_type_name(&other)),
            )
            .into())
        }
    };

    serde_json::from_value(args)
        .map_err(|e| ToolError::invalid_parameter(tool_name, "arguments", e.to_string()).into())
}

/// Path of the first required field that `args` leaves out, e.g.
/// `exercises[0].sets[1].type`
///
/// Nested objects and array items are checked against their property schemas.
/// Arguments that are neither an object nor `null` are left for [`parse_args`]
/// to reject.
#[must_use]
pub fn first_missing_field(schema: &JsonSchema, args: &Value) -> Option<String> {
    match args {
        Value::Null => schema.required.first().cloned(),
        Value::Object(object) => {
            missing_in_object(&schema.properties, &schema.required, object, "")
        }
        _ => None,
    }
}

fn missing_in_object(
    properties: &BTreeMap<String, PropertySchema>,
    required: &[String],
    object: &Map<String, Value>,
    prefix: &str,
) -> Option<String> {
    if let Some(name) = required.iter().find(|name| !object.contains_key(name.as_str())) {
        return Some(field_path(prefix, name));
    }

    object.iter().find_map(|(name, value)| {
        properties
            .get(name)
            .and_then(|schema| missing_in_value(schema, value, &field_path(prefix, name)))
    })
}

fn missing_in_value(schema: &PropertySchema, value: &Value, path: &str) -> Option<String> {
    match value {
        Value::Object(object) => missing_in_object(
            schema.properties.as_ref()?,
            schema.required.as_deref().unwrap_or_default(),
            object,
            path,
        ),
        Value::Array(items) => {
            let item_schema = schema.items.as_deref()?;
            items
                .iter()
                .enumerate()
                .find_map(|(index, item)| missing_in_value(item_schema, item, &format!("{path}[{index}]")))
        }
        _ => None,
    }
}

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorCode;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct ById {
        workout_id: String,
    }

    fn nested_schema() -> JsonSchema {
        let set = JsonSchema::empty()
            .required("type", PropertySchema::string())
            .optional("reps", PropertySchema::number().nullable());
        let exercise = JsonSchema::empty()
            .required("notes", PropertySchema::string())
            .required("sets", PropertySchema::array(set.into_property()));
        JsonSchema::empty()
            .required("title", PropertySchema::string())
            .required("exercises", PropertySchema::array(exercise.into_property()))
    }

    #[test]
    fn test_serde_mismatch_is_invalid_input() {
        let err = parse_args::<ById>("getWorkoutById", json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_first_missing_field_top_level() {
        let schema = nested_schema();
        assert_eq!(
            first_missing_field(&schema, &json!({"exercises": []})).as_deref(),
            Some("title")
        );
        assert_eq!(first_missing_field(&schema, &Value::Null).as_deref(), Some("title"));
        assert_eq!(first_missing_field(&schema, &json!(["x"])), None);
    }

    #[test]
    fn test_first_missing_field_reports_nested_path() {
        let schema = nested_schema();
        let args = json!({
            "title": "t",
            "exercises": [
                {"notes": "", "sets": [{"type": "normal"}]},
                {"notes": "", "sets": [{"type": "warmup"}, {"reps": 5}]}
            ]
        });
        assert_eq!(
            first_missing_field(&schema, &args).as_deref(),
            Some("exercises[1].sets[1].type")
        );

        let missing_notes = json!({"title": "t", "exercises": [{"sets": []}]});
        assert_eq!(
            first_missing_field(&schema, &missing_notes).as_deref(),
            Some("exercises[0].notes")
        );
    }

    #[test]
    fn test_complete_arguments_have_no_missing_field() {
        let args = json!({"title": "t", "exercises": [{"notes": "", "sets": [{"type": "normal"}]}]});
        assert_eq!(first_missing_field(&nested_schema(), &args), None);
    }

    #[test]
    fn test_wrong_type_is_invalid_input() {
        let err = parse_args::<ById>("getWorkoutById", json!({"workoutId": 5})).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = parse_args::<ById>("getWorkoutById", json!(["w1"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("expected an object, got array"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed: ById =
            parse_args("getWorkoutById", json!({"workoutId": "w1", "extra": true})).unwrap();
        assert_eq!(parsed.workout_id, "w1");
    }
}
