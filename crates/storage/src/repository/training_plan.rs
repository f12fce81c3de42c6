use sqlx::SqlitePool;

use crate::dto::training_plan::TrainingPlanRequest;
use crate::error::{Result, StorageError};
use crate::models::TrainingPlan;
use crate::services::plan_encoding;

/// Repository for TrainingPlan database operations
pub struct TrainingPlanRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainingPlanRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the plans visible to a user: the ones they created, and the ones
    /// assigned to the user directly or to a mentee record they own or are
    /// linked to.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<TrainingPlan>> {
        let plans = sqlx::query_as::<_, TrainingPlan>(
            r#"
            SELECT id, creator_id, name, description, template_id, template_name,
                   days_of_week, exercises_by_day, mentee_id, created_at
            FROM training_plans
            WHERE creator_id = $1
               OR mentee_id = $1
               OR mentee_id IN (
                   SELECT id FROM mentees WHERE creator_id = $1 OR user_id = $1
               )
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(plans)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TrainingPlan> {
        let plan = sqlx::query_as::<_, TrainingPlan>(
            r#"
            SELECT id, creator_id, name, description, template_id, template_name,
                   days_of_week, exercises_by_day, mentee_id, created_at
            FROM training_plans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(plan)
    }

    /// Create a new training plan
    pub async fn create(&self, req: &TrainingPlanRequest) -> Result<TrainingPlan> {
        let (days, exercises) = encode_schedule(req)?;

        let plan = sqlx::query_as::<_, TrainingPlan>(
            r#"
            INSERT INTO training_plans (
                creator_id, name, description, template_id, template_name,
                days_of_week, exercises_by_day, mentee_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, creator_id, name, description, template_id, template_name,
                      days_of_week, exercises_by_day, mentee_id, created_at
            "#,
        )
        .bind(&req.creator_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.template_id)
        .bind(&req.template_name)
        .bind(days)
        .bind(exercises)
        .bind(&req.mentee_id)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(self.pool)
        .await?;

        Ok(plan)
    }

    /// Replace the content of a plan. The creator and creation time are kept.
    pub async fn update(&self, id: i64, req: &TrainingPlanRequest) -> Result<TrainingPlan> {
        let (days, exercises) = encode_schedule(req)?;

        let plan = sqlx::query_as::<_, TrainingPlan>(
            r#"
            UPDATE training_plans
            SET name = $2,
                description = $3,
                template_id = $4,
                template_name = $5,
                days_of_week = $6,
                exercises_by_day = $7,
                mentee_id = $8
            WHERE id = $1
            RETURNING id, creator_id, name, description, template_id, template_name,
                      days_of_week, exercises_by_day, mentee_id, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.template_id)
        .bind(&req.template_name)
        .bind(days)
        .bind(exercises)
        .bind(&req.mentee_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(plan)
    }

    /// Delete a training plan by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM training_plans WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn encode_schedule(req: &TrainingPlanRequest) -> Result<(String, String)> {
    let days = plan_encoding::encode_days(&req.days_of_week);
    let exercises = plan_encoding::encode_exercises(&req.exercises_by_day)?;

    if exercises.chars().count() > plan_encoding::MAX_EXERCISES_LEN {
        return Err(StorageError::ConstraintViolation(format!(
            "exercises_by_day exceeds {} characters once encoded",
            plan_encoding::MAX_EXERCISES_LEN
        )));
    }

    Ok((days, exercises))
}
