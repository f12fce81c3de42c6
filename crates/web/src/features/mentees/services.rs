use sqlx::SqlitePool;
use storage::{
    dto::mentee::{AcceptInvitationRequest, CreateMenteeRequest, UpdateMenteeRequest},
    error::Result,
    models::Mentee,
    repository::mentee::MenteeRepository,
};

/// Mentees registered by a coach
pub async fn list_mentees(pool: &SqlitePool, creator_id: &str) -> Result<Vec<Mentee>> {
    let repo = MenteeRepository::new(pool);
    repo.list_by_creator(creator_id).await
}

pub async fn create_mentee(pool: &SqlitePool, request: &CreateMenteeRequest) -> Result<Mentee> {
    let repo = MenteeRepository::new(pool);
    repo.create(request).await
}

pub async fn accept_invitation(
    pool: &SqlitePool,
    invite_key: &str,
    request: &AcceptInvitationRequest,
) -> Result<Mentee> {
    let repo = MenteeRepository::new(pool);
    repo.accept_invitation(invite_key, request).await
}

pub async fn update_mentee(
    pool: &SqlitePool,
    id: &str,
    request: &UpdateMenteeRequest,
) -> Result<Mentee> {
    let repo = MenteeRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

pub async fn delete_mentee(pool: &SqlitePool, id: &str) -> Result<()> {
    let repo = MenteeRepository::new(pool);
    repo.delete(id).await
}
