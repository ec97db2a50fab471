// ABOUTME: Workout, exercise, and set payloads accepted by createWorkout and updateWorkout
// ABOUTME: Normalization turns every absent optional field into an explicit null before upload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::nullable::{Keyed, Nullable, Omittable};

/// A workout as sent to the Hevy API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPayload {
    /// Workout title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// ISO-8601 start timestamp
    pub start_time: String,
    /// ISO-8601 end timestamp
    pub end_time: String,
    /// Hide the workout from followers
    pub is_private: bool,
    /// Exercises in performed order
    pub exercises: Vec<ExercisePayload>,
}

/// One exercise inside a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePayload {
    /// Exercise template this exercise instantiates
    pub exercise_template_id: String,
    /// Superset grouping; exercises sharing an id form a superset
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub superset_id: Nullable<Number>,
    /// Notes for this exercise
    pub notes: String,
    /// Sets in performed order
    pub sets: Vec<SetPayload>,
}

/// One set of an exercise
///
/// Numeric fields keep the JSON number exactly as received, so `8`, `8.0` and
/// `8.5` are all forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPayload {
    /// Set type, e.g. `normal`, `warmup`, `dropset`, `failure`
    #[serde(rename = "type")]
    pub set_type: String,
    /// Load in kilograms
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub weight_kg: Nullable<Number>,
    /// Repetitions
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub reps: Nullable<Number>,
    /// Distance in meters
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub distance_meters: Nullable<Number>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub duration_seconds: Nullable<Number>,
    /// Exercise-specific metric, passed through untouched when present
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub custom_metric: Keyed<Nullable<Value>>,
    /// Rate of perceived exertion
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub rpe: Nullable<Number>,
}

impl WorkoutPayload {
    /// Copy of this workout with every absent optional field set to `null`
    ///
    /// Exercise and set order is preserved and the receiver is left untouched.
    /// Applying it twice yields the same result as applying it once.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            is_private: self.is_private,
            exercises: self
                .exercises
                .iter()
                .map(ExercisePayload::normalized)
                .collect(),
        }
    }
}

impl ExercisePayload {
    /// Copy with `superset_id` and every set normalized
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            exercise_template_id: self.exercise_template_id.clone(),
            superset_id: self.superset_id.clone().or_null(),
            notes: self.notes.clone(),
            sets: self.sets.iter().map(SetPayload::normalized).collect(),
        }
    }
}

impl SetPayload {
    /// Copy with the numeric fields and `custom_metric` normalized
    ///
    /// `custom_metric` is decided by key presence alone: an absent key becomes
    /// `null`, a key holding no value is left as it is.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            set_type: self.set_type.clone(),
            weight_kg: self.weight_kg.clone().or_null(),
            reps: self.reps.clone().or_null(),
            distance_meters: self.distance_meters.clone().or_null(),
            duration_seconds: self.duration_seconds.clone().or_null(),
            custom_metric: self.custom_metric.clone().or_present_null(),
            rpe: self.rpe.clone().or_null(),
        }
    }
}

/// Request body wrapper for create/update workout calls
#[derive(Debug, Serialize)]
pub struct WorkoutRequest<'a> {
    /// Wrapped workout
    pub workout: &'a WorkoutPayload,
}
