mod aggregator;
mod models;
mod parser;

pub use aggregator::{AggregationReport, SkipReason, WorkoutAggregator};
pub use models::CsvWorkoutRow;

use std::path::{Path, PathBuf};

use storage::repository::workout::WorkoutRepository;
use tracing::{debug, info, warn};

use crate::{
    ImportContext, ImporterError, Result,
    traits::{ImportSummary, WorkoutImporter},
};

/// Imports a set-per-row workout log export into the workout history table.
pub struct WorkoutCsvImporter {
    path: PathBuf,
}

impl WorkoutCsvImporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and aggregate the file without touching the database.
    pub async fn read(&self) -> Result<AggregationReport> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(ImporterError::SourceNotFound(self.path.clone()));
        }

        let bytes = tokio::fs::read(&self.path).await?;
        Ok(parse_records(&bytes))
    }
}

/// Aggregate raw CSV bytes into workouts. Rows that cannot be used are
/// counted and logged, never fatal.
pub fn parse_records(bytes: &[u8]) -> AggregationReport {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let mut aggregator = WorkoutAggregator::new();

    for (index, record) in reader.deserialize::<CsvWorkoutRow>().enumerate() {
        // Line 1 is the header.
        let line = index + 2;

        match record {
            Ok(row) => {
                if let Err(reason) = aggregator.push(&row) {
                    debug!("Skipping row at line {}: {:?}", line, reason);
                }
            }
            Err(e) => {
                warn!("Unreadable row at line {}: {}", line, e);
                aggregator.skip_unreadable();
            }
        }
    }

    aggregator.finish()
}

#[async_trait::async_trait]
impl WorkoutImporter for WorkoutCsvImporter {
    async fn import(&self, context: &ImportContext) -> Result<ImportSummary> {
        info!("Importing workout log from {}", self.path.display());

        let report = self.read().await?;
        let summary = ImportSummary {
            rows_read: report.rows_read,
            rows_skipped: report.rows_skipped,
            workouts: report.workouts.len(),
            sets: report.set_count(),
        };

        if report.rows_skipped > 0 {
            warn!(
                "Skipped {} of {} rows in {}",
                report.rows_skipped,
                report.rows_read,
                self.path.display()
            );
        }

        if !report.workouts.is_empty() {
            WorkoutRepository::new(&context.pool)
                .insert_many(&report.workouts)
                .await?;
        }

        info!(
            "Imported {} workouts ({} sets) from {}",
            summary.workouts,
            summary.sets,
            self.path.display()
        );

        Ok(summary)
    }

    fn name(&self) -> &'static str {
        "Workout CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "title,start_time,end_time,description,exercise_title,superset_id,exercise_notes,set_index,set_type,weight_kg,reps,distance_km,duration_seconds,rpe\n";

    #[test]
    fn test_parse_records_groups_sets() {
        let csv = format!(
            "{HEADER}\
             \"Push\",\"05 Jan 2024, 18:30\",\"05 Jan 2024, 19:30\",,\"Bench Press\",,,0,normal,60,8,,,\n\
             \"Push\",\"05 Jan 2024, 18:30\",\"05 Jan 2024, 19:30\",,\"Bench Press\",,,1,normal,60,6,,,\n\
             \"Pull\",\"06 Jan 2024, 07:00\",\"06 Jan 2024, 07:40\",,\"Row\",,\"slow\",0,warmup,40,10,,,\n"
        );

        let report = parse_records(csv.as_bytes());
        assert_eq!(report.rows_read, 3);
        assert_eq!(report.rows_skipped, 0);
        assert_eq!(report.workouts.len(), 2);
        assert_eq!(report.workouts[0].title, "Push");
        assert_eq!(report.workouts[0].sets, 2);
        assert_eq!(report.workouts[0].volume_kg, 840.0);
        assert_eq!(report.workouts[0].duration_minutes, 60);
        assert_eq!(report.workouts[1].workout_sets[0].exercise_notes.as_deref(), Some("slow"));
        assert_eq!(report.set_count(), 3);
    }

    #[test]
    fn test_parse_records_skips_bad_rows() {
        let csv = format!(
            "{HEADER}\
             \"Push\",\"not a date\",\"05 Jan 2024, 19:30\",,\"Bench Press\",,,0,normal,60,8,,,\n\
             ,\"05 Jan 2024, 18:30\",\"05 Jan 2024, 19:30\",,\"Bench Press\",,,0,normal,60,8,,,\n\
             \"Push\",\"05 Jan 2024, 18:30\"\n\
             \"Push\",\"05 Jan 2024, 18:30\",\"05 Jan 2024, 19:30\",,\"Bench Press\",,,0,normal,60,8,,,\n"
        );

        let report = parse_records(csv.as_bytes());
        assert_eq!(report.rows_read, 4);
        assert_eq!(report.rows_skipped, 3);
        assert_eq!(report.workouts.len(), 1);
    }

    #[test]
    fn test_parse_records_empty_input() {
        let report = parse_records(HEADER.as_bytes());
        assert!(report.workouts.is_empty());
        assert_eq!(report.rows_read, 0);

        let report = parse_records(b"");
        assert!(report.workouts.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let importer = WorkoutCsvImporter::new("/nonexistent/workouts.csv");
        let err = importer.read().await.unwrap_err();
        assert!(matches!(err, ImporterError::SourceNotFound(_)));
    }
}
