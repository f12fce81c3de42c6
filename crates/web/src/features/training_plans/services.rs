use sqlx::SqlitePool;
use storage::{
    dto::training_plan::TrainingPlanRequest, error::Result, models::TrainingPlan,
    repository::training_plan::TrainingPlanRepository,
};

/// Plans created by the user or assigned to them
pub async fn list_training_plans(pool: &SqlitePool, user_id: &str) -> Result<Vec<TrainingPlan>> {
    let repo = TrainingPlanRepository::new(pool);
    repo.list_for_user(user_id).await
}

pub async fn get_training_plan(pool: &SqlitePool, id: i64) -> Result<TrainingPlan> {
    let repo = TrainingPlanRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_training_plan(
    pool: &SqlitePool,
    request: &TrainingPlanRequest,
) -> Result<TrainingPlan> {
    let repo = TrainingPlanRepository::new(pool);
    repo.create(request).await
}

pub async fn update_training_plan(
    pool: &SqlitePool,
    id: i64,
    request: &TrainingPlanRequest,
) -> Result<TrainingPlan> {
    let repo = TrainingPlanRepository::new(pool);
    repo.update(id, request).await
}

pub async fn delete_training_plan(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = TrainingPlanRepository::new(pool);
    repo.delete(id).await
}
