use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::TrainingPlan;
use crate::services::plan_encoding;

/// Exercises scheduled for each weekday, keyed by the weekday label.
pub type ExercisesByDay = BTreeMap<String, Vec<PlanExercise>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanSet {
    #[serde(rename = "type")]
    pub set_type: String,
    pub weight: String,
    pub reps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanExercise {
    pub name: String,
    pub sets: Vec<PlanSet>,
}

/// Request payload for creating or fully replacing a training plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingPlanRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub template_id: String,

    #[validate(length(min = 1, max = 200))]
    pub template_name: String,

    #[validate(length(min = 1, message = "At least one day of the week is required"))]
    #[validate(custom(function = "validate_days"))]
    pub days_of_week: Vec<String>,

    #[serde(default)]
    #[schema(value_type = BTreeMap<String, Vec<PlanExercise>>)]
    pub exercises_by_day: ExercisesByDay,

    #[validate(length(max = 255))]
    pub creator_id: Option<String>,

    #[validate(length(max = 36))]
    pub mentee_id: Option<String>,
}

fn validate_days(days: &Vec<String>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for day in days {
        if day.trim().is_empty() || day.contains(plan_encoding::DAY_SEPARATOR) {
            return Err(ValidationError::new("invalid_day"));
        }
        if !seen.insert(day.as_str()) {
            return Err(ValidationError::new("duplicate_day"));
        }
    }

    if plan_encoding::encode_days(days).len() > plan_encoding::MAX_DAYS_LEN {
        return Err(ValidationError::new("days_too_long"));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingPlanResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub template_id: String,
    pub template_name: String,
    pub days_of_week: Vec<String>,
    #[schema(value_type = BTreeMap<String, Vec<PlanExercise>>)]
    pub exercises_by_day: ExercisesByDay,
    pub creator_id: Option<String>,
    pub mentee_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<TrainingPlan> for TrainingPlanResponse {
    fn from(plan: TrainingPlan) -> Self {
        let days_of_week = plan_encoding::decode_days(&plan.days_of_week);
        let exercises_by_day = plan_encoding::decode_exercises(plan.id, &plan.exercises_by_day);

        Self {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            template_id: plan.template_id,
            template_name: plan.template_name,
            days_of_week,
            exercises_by_day,
            creator_id: plan.creator_id,
            mentee_id: plan.mentee_id,
            created_at: plan.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(days: &[&str]) -> TrainingPlanRequest {
        TrainingPlanRequest {
            name: "Strength block".to_string(),
            description: None,
            template_id: "ppl".to_string(),
            template_name: "Push Pull Legs".to_string(),
            days_of_week: days.iter().map(|d| d.to_string()).collect(),
            exercises_by_day: ExercisesByDay::new(),
            creator_id: Some("coach-1".to_string()),
            mentee_id: None,
        }
    }

    #[test]
    fn test_requires_at_least_one_day() {
        assert!(request(&[]).validate().is_err());
        assert!(request(&["Mon"]).validate().is_ok());
    }

    #[test]
    fn test_rejects_days_that_break_encoding() {
        assert!(request(&["Mon,Tue"]).validate().is_err());
        assert!(request(&[" "]).validate().is_err());
        assert!(request(&["Mon", "Mon"]).validate().is_err());
    }

    #[test]
    fn test_set_type_serializes_as_type() {
        let set = PlanSet {
            set_type: "working".to_string(),
            weight: "100".to_string(),
            reps: "5".to_string(),
        };
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["type"], "working");
    }
}
