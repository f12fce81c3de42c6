use sqlx::SqlitePool;
use storage::{
    dto::{
        common::{Page, PaginationParams},
        workout::CreateWorkoutRequest,
    },
    error::Result,
    models::Workout,
    repository::workout::WorkoutRepository,
};

/// One page of the workout history, newest first
pub async fn list_history(pool: &SqlitePool, params: PaginationParams) -> Result<Page<Workout>> {
    let repo = WorkoutRepository::new(pool);
    repo.list_page(params).await
}

pub async fn create_workout(pool: &SqlitePool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.create(request).await
}
