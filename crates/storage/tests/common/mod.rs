#![allow(dead_code)]

use chrono::NaiveDate;
use storage::Database;
use storage::dto::workout::CreateWorkoutRequest;
use storage::models::WorkoutSet;

pub async fn create_test_db() -> Database {
    let db = Database::new("sqlite::memory:").await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

pub fn workout_on(title: &str, date: NaiveDate) -> CreateWorkoutRequest {
    let workout_sets = vec![WorkoutSet {
        exercise_title: "Deadlift".to_string(),
        superset_id: None,
        exercise_notes: None,
        set_index: 0,
        set_type: "normal".to_string(),
        weight_kg: Some(140.0),
        reps: Some(3),
    }];

    CreateWorkoutRequest {
        title: title.to_string(),
        workout_date: date,
        duration_minutes: 45,
        volume_kg: 420.0,
        sets: 1,
        workout_sets,
        start_time: None,
        end_time: None,
    }
}

pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
}
