//! Mapping between the wire shape of a training plan schedule (weekday list and a
//! weekday → exercises map) and its persisted shape (one comma-joined text column
//! and one JSON text column).

use crate::dto::training_plan::ExercisesByDay;
use crate::error::Result;

pub const DAY_SEPARATOR: char = ',';

/// Column width of `training_plans.days_of_week`.
pub const MAX_DAYS_LEN: usize = 200;

/// Column width of `training_plans.exercises_by_day`.
pub const MAX_EXERCISES_LEN: usize = 4000;

pub fn encode_days(days: &[String]) -> String {
    days.join(",")
}

/// Splits the stored weekday list, dropping empty segments.
pub fn decode_days(stored: &str) -> Vec<String> {
    stored
        .split(DAY_SEPARATOR)
        .filter(|day| !day.is_empty())
        .map(String::from)
        .collect()
}

pub fn encode_exercises(exercises: &ExercisesByDay) -> Result<String> {
    Ok(serde_json::to_string(exercises)?)
}

/// Parses the stored exercise map. Empty or unreadable text yields an empty map so
/// that a single corrupt row never breaks a listing.
pub fn decode_exercises(plan_id: i64, stored: &str) -> ExercisesByDay {
    if stored.is_empty() {
        return ExercisesByDay::new();
    }

    match serde_json::from_str(stored) {
        Ok(exercises) => exercises,
        Err(e) => {
            tracing::warn!(
                plan_id,
                error = %e,
                "Discarding unreadable exercises_by_day for training plan"
            );
            ExercisesByDay::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::training_plan::{PlanExercise, PlanSet};

    fn days(items: &[&str]) -> Vec<String> {
        items.iter().map(|d| d.to_string()).collect()
    }

    fn squat_day() -> ExercisesByDay {
        let mut exercises = ExercisesByDay::new();
        exercises.insert(
            "Mon".to_string(),
            vec![PlanExercise {
                name: "Squat".to_string(),
                sets: vec![
                    PlanSet {
                        set_type: "warmup".to_string(),
                        weight: "60".to_string(),
                        reps: "8".to_string(),
                    },
                    PlanSet {
                        set_type: "working".to_string(),
                        weight: "100".to_string(),
                        reps: "5".to_string(),
                    },
                ],
            }],
        );
        exercises.insert("Wed".to_string(), Vec::new());
        exercises
    }

    #[test]
    fn test_days_round_trip_preserves_order() {
        let original = days(&["Wed", "Mon", "Fri"]);
        let encoded = encode_days(&original);
        assert_eq!(encoded, "Wed,Mon,Fri");
        assert_eq!(decode_days(&encoded), original);
    }

    #[test]
    fn test_decode_days_skips_empty_segments() {
        assert_eq!(decode_days("Mon,,Tue,"), days(&["Mon", "Tue"]));
        assert!(decode_days("").is_empty());
    }

    #[test]
    fn test_exercises_round_trip() {
        let original = squat_day();
        let encoded = encode_exercises(&original).unwrap();
        assert_eq!(decode_exercises(1, &encoded), original);
    }

    #[test]
    fn test_empty_schedule_round_trip() {
        let encoded_days = encode_days(&[]);
        let encoded_exercises = encode_exercises(&ExercisesByDay::new()).unwrap();
        assert!(decode_days(&encoded_days).is_empty());
        assert!(decode_exercises(1, &encoded_exercises).is_empty());
    }

    #[test]
    fn test_unreadable_exercises_decode_to_empty() {
        assert!(decode_exercises(7, "").is_empty());
        assert!(decode_exercises(7, "{not json").is_empty());
        assert!(decode_exercises(7, "[1, 2, 3]").is_empty());
    }
}
