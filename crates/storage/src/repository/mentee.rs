use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::mentee::{
    ACCEPTED_STATUS, AcceptInvitationRequest, CreateMenteeRequest, UpdateMenteeRequest,
};
use crate::error::{Result, StorageError};
use crate::models::Mentee;

pub struct MenteeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MenteeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the mentees owned by a coach, newest first
    pub async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Mentee>> {
        let mentees = sqlx::query_as::<_, Mentee>(
            r#"
            SELECT id, creator_id, user_id, name, email_address, invite_key,
                   status, type, notes, created
            FROM mentees
            WHERE creator_id = $1
            ORDER BY created DESC, rowid DESC
            "#,
        )
        .bind(creator_id)
        .fetch_all(self.pool)
        .await?;

        Ok(mentees)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Mentee> {
        let mentee = sqlx::query_as::<_, Mentee>(
            r#"
            SELECT id, creator_id, user_id, name, email_address, invite_key,
                   status, type, notes, created
            FROM mentees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(mentee)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM mentees WHERE email_address = $1)",
        )
        .bind(email)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a mentee with a fresh id and invite key. An email, when given,
    /// must not belong to another mentee yet.
    pub async fn create(&self, req: &CreateMenteeRequest) -> Result<Mentee> {
        if let Some(email) = req.email()
            && self.email_exists(email).await?
        {
            return Err(StorageError::ConstraintViolation(
                "Mentee with this email already exists.".to_string(),
            ));
        }

        let mentee = sqlx::query_as::<_, Mentee>(
            r#"
            INSERT INTO mentees (
                id, creator_id, name, email_address, invite_key, status, type, notes, created
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, creator_id, user_id, name, email_address, invite_key,
                      status, type, notes, created
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&req.creator_id)
        .bind(&req.name)
        .bind(&req.email_address)
        .bind(Uuid::new_v4().to_string())
        .bind(&req.status)
        .bind(&req.mentee_type)
        .bind(&req.notes)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return StorageError::ConstraintViolation("Invite key already exists".to_string());
            }
            err
        })?;

        Ok(mentee)
    }

    /// Bind the mentee holding `invite_key` to a platform user
    pub async fn accept_invitation(
        &self,
        invite_key: &str,
        req: &AcceptInvitationRequest,
    ) -> Result<Mentee> {
        let mentee = sqlx::query_as::<_, Mentee>(
            r#"
            UPDATE mentees
            SET name = $2,
                user_id = $3,
                status = $4
            WHERE invite_key = $1
            RETURNING id, creator_id, user_id, name, email_address, invite_key,
                      status, type, notes, created
            "#,
        )
        .bind(invite_key)
        .bind(&req.name)
        .bind(&req.user_id)
        .bind(ACCEPTED_STATUS)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(mentee)
    }

    /// Apply a partial update on top of the stored mentee
    pub async fn update(
        &self,
        id: &str,
        existing: &Mentee,
        req: &UpdateMenteeRequest,
    ) -> Result<Mentee> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let email_address = match &req.email_address {
            Some(value) => value.as_ref(),
            None => existing.email_address.as_ref(),
        };
        let status = req.status.as_ref().unwrap_or(&existing.status);
        let mentee_type = req.mentee_type.as_ref().unwrap_or(&existing.mentee_type);
        let notes = match &req.notes {
            Some(value) => value.as_ref(),
            None => existing.notes.as_ref(),
        };

        let mentee = sqlx::query_as::<_, Mentee>(
            r#"
            UPDATE mentees
            SET name = $2,
                email_address = $3,
                status = $4,
                type = $5,
                notes = $6
            WHERE id = $1
            RETURNING id, creator_id, user_id, name, email_address, invite_key,
                      status, type, notes, created
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email_address)
        .bind(status)
        .bind(mentee_type)
        .bind(notes)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(mentee)
    }

    /// Delete a mentee by ID
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM mentees WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
