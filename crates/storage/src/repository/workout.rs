use sqlx::{Sqlite, SqlitePool, types::Json};

use crate::dto::common::{Page, PaginationParams};
use crate::dto::workout::CreateWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::Workout;

/// Repository for workout history
pub struct WorkoutRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workout_history")
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    /// List one page of workouts, newest first
    pub async fn list_page(&self, params: PaginationParams) -> Result<Page<Workout>> {
        let total = self.count().await?;

        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, title, workout_date, duration_minutes, volume_kg, sets,
                   workout_sets, start_time, end_time, created_at
            FROM workout_history
            ORDER BY workout_date DESC, created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(Page::new(workouts, params, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, title, workout_date, duration_minutes, volume_kg, sets,
                   workout_sets, start_time, end_time, created_at
            FROM workout_history
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Create a new workout history entry
    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        insert_workout(self.pool, req).await
    }

    /// Insert all workouts in a single transaction. Nothing is written if any
    /// insert fails.
    pub async fn insert_many(&self, workouts: &[CreateWorkoutRequest]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        for req in workouts {
            insert_workout(&mut *tx, req).await?;
        }

        tx.commit().await?;
        Ok(workouts.len())
    }
}

async fn insert_workout<'e, E>(executor: E, req: &CreateWorkoutRequest) -> Result<Workout>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let workout = sqlx::query_as::<_, Workout>(
        r#"
        INSERT INTO workout_history (
            title, workout_date, duration_minutes, volume_kg, sets,
            workout_sets, start_time, end_time, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, title, workout_date, duration_minutes, volume_kg, sets,
                  workout_sets, start_time, end_time, created_at
        "#,
    )
    .bind(&req.title)
    .bind(req.workout_date)
    .bind(req.duration_minutes)
    .bind(req.volume_kg)
    .bind(req.sets)
    .bind(Json(&req.workout_sets))
    .bind(req.start_time)
    .bind(req.end_time)
    .bind(chrono::Utc::now().naive_utc())
    .fetch_one(executor)
    .await?;

    Ok(workout)
}
