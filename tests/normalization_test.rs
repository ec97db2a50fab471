// ABOUTME: Property tests for workout payload normalization before create and update
// ABOUTME: Absent optional fields become null, present values survive, order is kept, and the input is untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hevy_core::models::WorkoutPayload;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const NULLED_SET_FIELDS: [&str; 5] = [
    "weight_kg",
    "reps",
    "distance_meters",
    "duration_seconds",
    "rpe",
];

/// `None` = key absent, `Some(Value::Null)` = explicit null, otherwise a value
fn optional_field(value: BoxedStrategy<Value>) -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        value.prop_map(Some),
    ]
}

fn fractional() -> BoxedStrategy<Value> {
    (0u32..5_000)
        .prop_map(|n| json!(f64::from(n) + 0.5))
        .boxed()
}

/// Integers, integral floats such as `8.0`, and fractions all count as numbers
fn whole() -> BoxedStrategy<Value> {
    prop_oneof![
        (0i64..10_000).prop_map(|n| json!(n)),
        (0u32..10_000).prop_map(|n| json!(f64::from(n))),
        fractional(),
    ]
    .boxed()
}

fn set_strategy() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just("normal"), Just("warmup"), Just("dropset"), Just("failure")],
        optional_field(fractional()),
        optional_field(whole()),
        optional_field(whole()),
        optional_field(whole()),
        optional_field(whole()),
        optional_field(fractional()),
    )
        .prop_map(
            |(set_type, weight_kg, reps, distance, duration, custom_metric, rpe)| {
                let mut set = Map::new();
                set.insert("type".to_owned(), json!(set_type));
                for (key, value) in [
                    ("weight_kg", weight_kg),
                    ("reps", reps),
                    ("distance_meters", distance),
                    ("duration_seconds", duration),
                    ("custom_metric", custom_metric),
                    ("rpe", rpe),
                ] {
                    if let Some(value) = value {
                        set.insert(key.to_owned(), value);
                    }
                }
                Value::Object(set)
            },
        )
}

fn exercise_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-f0-9]{8}",
        optional_field(whole()),
        prop::collection::vec(set_strategy(), 0..5),
    )
        .prop_map(|(template_id, superset_id, sets)| {
            let mut exercise = Map::new();
            exercise.insert("exercise_template_id".to_owned(), json!(template_id));
            exercise.insert("notes".to_owned(), json!(""));
            exercise.insert("sets".to_owned(), Value::Array(sets));
            if let Some(superset_id) = superset_id {
                exercise.insert("superset_id".to_owned(), superset_id);
            }
            Value::Object(exercise)
        })
}

fn workout_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(exercise_strategy(), 0..5).prop_map(|exercises| {
        json!({
            "title": "Generated",
            "description": "",
            "start_time": "2025-01-01T10:00:00Z",
            "end_time": "2025-01-01T11:00:00Z",
            "is_private": true,
            "exercises": exercises,
        })
    })
}

proptest! {
    #[test]
    fn absent_fields_become_null_and_values_survive(input in workout_strategy()) {
        let payload: WorkoutPayload = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(payload.normalized()).unwrap();

        let in_exercises = input["exercises"].as_array().unwrap();
        let out_exercises = output["exercises"].as_array().unwrap();
        prop_assert_eq!(in_exercises.len(), out_exercises.len());

        for (inp, out) in in_exercises.iter().zip(out_exercises) {
            prop_assert_eq!(&inp["exercise_template_id"], &out["exercise_template_id"]);
            prop_assert_eq!(
                out.get("superset_id").unwrap(),
                inp.get("superset_id").unwrap_or(&Value::Null)
            );

            let in_sets = inp["sets"].as_array().unwrap();
            let out_sets = out["sets"].as_array().unwrap();
            prop_assert_eq!(in_sets.len(), out_sets.len());

            for (in_set, out_set) in in_sets.iter().zip(out_sets) {
                prop_assert_eq!(&in_set["type"], &out_set["type"]);
                for field in NULLED_SET_FIELDS {
                    prop_assert_eq!(
                        out_set.get(field).unwrap(),
                        in_set.get(field).unwrap_or(&Value::Null),
                        "field {}", field
                    );
                }
                prop_assert_eq!(
                    out_set.get("custom_metric").unwrap(),
                    in_set.get("custom_metric").unwrap_or(&Value::Null)
                );
            }
        }
    }

    #[test]
    fn normalization_is_idempotent(input in workout_strategy()) {
        let payload: WorkoutPayload = serde_json::from_value(input).unwrap();
        let once = payload.normalized();
        prop_assert_eq!(once.normalized(), once);
    }

    #[test]
    fn normalization_leaves_input_untouched(input in workout_strategy()) {
        let payload: WorkoutPayload = serde_json::from_value(input.clone()).unwrap();
        let before = payload.clone();
        let _ = payload.normalized();
        prop_assert_eq!(&payload, &before);
        prop_assert_eq!(serde_json::to_value(&payload).unwrap(), input);
    }
}

#[test]
fn test_canonical_single_set_workout() {
    let payload: WorkoutPayload = serde_json::from_value(json!({
        "title": "t",
        "description": "d",
        "start_time": "s",
        "end_time": "e",
        "is_private": false,
        "exercises": [{
            "exercise_template_id": "t1",
            "notes": "n",
            "sets": [{"type": "normal"}]
        }]
    }))
    .unwrap();

    let output = serde_json::to_value(payload.normalized()).unwrap();
    assert_eq!(
        output["exercises"],
        json!([{
            "exercise_template_id": "t1",
            "superset_id": null,
            "notes": "n",
            "sets": [{
                "type": "normal",
                "weight_kg": null,
                "reps": null,
                "distance_meters": null,
                "duration_seconds": null,
                "custom_metric": null,
                "rpe": null
            }]
        }])
    );
}

#[test]
fn test_custom_metric_explicit_null_is_kept_as_null() {
    let payload: WorkoutPayload = serde_json::from_value(json!({
        "title": "t",
        "description": "",
        "start_time": "s",
        "end_time": "e",
        "is_private": false,
        "exercises": [{
            "exercise_template_id": "t1",
            "notes": "",
            "sets": [{"type": "normal", "custom_metric": null, "reps": 0}]
        }]
    }))
    .unwrap();

    let output = serde_json::to_value(payload.normalized()).unwrap();
    let set = &output["exercises"][0]["sets"][0];
    assert!(set.get("custom_metric").unwrap().is_null());
    assert_eq!(set["reps"], 0);
}
