use std::path::PathBuf;

use sqlx::SqlitePool;
use storage::repository::workout::WorkoutRepository;
use tracing::info;

use crate::{
    ImportContext, ImporterError, Result,
    sources::workout_csv::WorkoutCsvImporter,
    traits::{ImportSummary, WorkoutImporter},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The history table already had rows; nothing was read.
    AlreadySeeded { existing: i64 },
    /// The source file does not exist.
    SourceMissing(PathBuf),
    Seeded(ImportSummary),
}

/// Run `importer` only when the workout history is empty.
pub async fn seed_if_empty(
    importer: &dyn WorkoutImporter,
    context: &ImportContext,
) -> Result<SeedOutcome> {
    let existing = WorkoutRepository::new(&context.pool).count().await?;
    if existing > 0 {
        info!(
            "Workout history already holds {} entries, skipping {} seed",
            existing,
            importer.name()
        );
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    force_seed(importer, context).await
}

/// Run `importer` regardless of existing rows. A missing source is not an error.
pub async fn force_seed(
    importer: &dyn WorkoutImporter,
    context: &ImportContext,
) -> Result<SeedOutcome> {
    match importer.import(context).await {
        Ok(summary) => Ok(SeedOutcome::Seeded(summary)),
        Err(ImporterError::SourceNotFound(path)) => {
            info!("Seed file {} not found, skipping seed", path.display());
            Ok(SeedOutcome::SourceMissing(path))
        }
        Err(e) => Err(e),
    }
}

/// Seed the workout history from the CSV at `path` if the table is empty.
pub async fn seed_workout_history(
    pool: &SqlitePool,
    path: impl Into<PathBuf>,
) -> Result<SeedOutcome> {
    let importer = WorkoutCsvImporter::new(path);
    let context = ImportContext { pool: pool.clone() };
    seed_if_empty(&importer, &context).await
}
