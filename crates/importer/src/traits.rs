use crate::Result;
use sqlx::SqlitePool;

pub struct ImportContext {
    pub pool: SqlitePool,
}

/// Counters reported by an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub workouts: usize,
    pub sets: usize,
}

#[async_trait::async_trait]
pub trait WorkoutImporter: Send + Sync {
    /// Read the source and persist every workout it yields.
    async fn import(&self, context: &ImportContext) -> Result<ImportSummary>;

    fn name(&self) -> &'static str;
}
