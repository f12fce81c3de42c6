use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Training plan row as persisted. `days_of_week` and `exercises_by_day` hold the
/// flattened text encoding, see `services::plan_encoding`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrainingPlan {
    pub id: i64,
    pub creator_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub template_id: String,
    pub template_name: String,
    pub days_of_week: String,
    pub exercises_by_day: String,
    pub mentee_id: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
