use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;

/// One set of one exercise, embedded in its workout as an ordered JSON list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSet {
    pub exercise_title: String,
    #[serde(default)]
    pub superset_id: Option<i64>,
    #[serde(default)]
    pub exercise_notes: Option<String>,
    pub set_index: i64,
    pub set_type: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub reps: Option<i64>,
}

impl WorkoutSet {
    /// Weight times reps, when both are known.
    pub fn volume(&self) -> Option<f64> {
        match (self.weight_kg, self.reps) {
            (Some(weight), Some(reps)) => Some(weight * reps as f64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i64,
    pub title: String,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub volume_kg: f64,
    pub sets: i32,
    #[schema(value_type = Vec<WorkoutSet>)]
    pub workout_sets: Json<Vec<WorkoutSet>>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
