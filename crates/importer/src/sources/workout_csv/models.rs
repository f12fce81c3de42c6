use serde::Deserialize;

/// One line of a workout log export. Every column is optional so that short or
/// partially filled rows still deserialize and can be judged by the aggregator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsvWorkoutRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub exercise_title: Option<String>,
    #[serde(default)]
    pub superset_id: Option<String>,
    #[serde(default)]
    pub exercise_notes: Option<String>,
    #[serde(default)]
    pub set_index: Option<String>,
    #[serde(default)]
    pub set_type: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<String>,
    #[serde(default)]
    pub reps: Option<String>,
}
