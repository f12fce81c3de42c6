use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{Workout, WorkoutSet};

/// Request payload for logging a workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_set_count"))]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    pub workout_date: NaiveDate,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration_minutes: i32,

    #[validate(range(min = 0.0, message = "Volume cannot be negative"))]
    pub volume_kg: f64,

    #[validate(range(min = 0))]
    pub sets: i32,

    pub workout_sets: Vec<WorkoutSet>,

    pub start_time: Option<NaiveDateTime>,

    pub end_time: Option<NaiveDateTime>,
}

fn validate_set_count(req: &CreateWorkoutRequest) -> Result<(), ValidationError> {
    if usize::try_from(req.sets).ok() == Some(req.workout_sets.len()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("set_count_mismatch");
        error.message = Some("sets must equal the number of workout_sets".into());
        Err(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: i64,
    pub title: String,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub volume_kg: f64,
    pub sets: i32,
    pub workout_sets: Vec<WorkoutSet>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            title: workout.title,
            workout_date: workout.workout_date,
            duration_minutes: workout.duration_minutes,
            volume_kg: workout.volume_kg,
            sets: workout.sets,
            workout_sets: workout.workout_sets.0,
            start_time: workout.start_time,
            end_time: workout.end_time,
            created_at: workout.created_at,
        }
    }
}
