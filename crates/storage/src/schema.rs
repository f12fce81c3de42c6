use sqlx::SqlitePool;

use crate::error::Result;

/// Columns added to `workout_history` after the initial schema shipped.
const WORKOUT_HISTORY_PATCH_COLUMNS: &[&str] = &["start_time", "end_time"];

async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>> {
    let columns = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info($1)")
        .bind(table)
        .fetch_all(pool)
        .await?;

    Ok(columns)
}

/// Add the nullable timestamp columns to `workout_history` when they are missing.
/// Safe to run on every startup.
pub async fn ensure_workout_history_columns(pool: &SqlitePool) -> Result<Vec<&'static str>> {
    let existing = table_columns(pool, "workout_history").await?;
    let mut added = Vec::new();

    for column in WORKOUT_HISTORY_PATCH_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }

        sqlx::query(&format!(
            "ALTER TABLE workout_history ADD COLUMN {column} DATETIME"
        ))
        .execute(pool)
        .await?;

        tracing::info!(column, "Added missing column to workout_history");
        added.push(*column);
    }

    Ok(added)
}
