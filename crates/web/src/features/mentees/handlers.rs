use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{MessageResponse, UserQuery},
        mentee::{
            AcceptInvitationRequest, AcceptInvitationResponse, CreateMenteeRequest,
            MenteeResponse, UpdateMenteeRequest,
        },
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

const NOT_FOUND: &str = "Mentee not found.";

#[utoipa::path(
    get,
    path = "/api/mentees",
    params(UserQuery),
    responses(
        (status = 200, description = "Mentees registered by the user, newest first", body = Vec<MenteeResponse>),
        (status = 400, description = "Missing user_id")
    ),
    tag = "mentees"
)]
pub async fn list_mentees(
    State(db): State<Database>,
    Query(query): Query<UserQuery>,
) -> Result<Response, WebError> {
    let mentees = services::list_mentees(db.pool(), &query.user_id).await?;

    let response: Vec<MenteeResponse> = mentees.into_iter().map(MenteeResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/mentees",
    request_body = CreateMenteeRequest,
    responses(
        (status = 201, description = "Mentee created with a fresh invite key", body = MenteeResponse),
        (status = 400, description = "Validation error or email already registered")
    ),
    tag = "mentees"
)]
pub async fn create_mentee(
    State(db): State<Database>,
    Json(req): Json<CreateMenteeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let mentee = services::create_mentee(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(MenteeResponse::from(mentee))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/mentees/accept-invitation/{invite_key}",
    params(
        ("invite_key" = String, Path, description = "Invitation key handed to the mentee")
    ),
    request_body = AcceptInvitationRequest,
    responses(
        (status = 200, description = "Mentee linked to the user", body = AcceptInvitationResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Invalid invitation key")
    ),
    tag = "mentees"
)]
pub async fn accept_invitation(
    State(db): State<Database>,
    Path(invite_key): Path<String>,
    Json(req): Json<AcceptInvitationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let mentee = services::accept_invitation(db.pool(), &invite_key, &req)
        .await
        .map_err(WebError::not_found("Invalid invitation key."))?;

    tracing::info!("Mentee {} accepted invitation as user {}", mentee.id, req.user_id);

    Ok(Json(AcceptInvitationResponse {
        success: true,
        message: "Invitation accepted successfully.".to_string(),
    })
    .into_response())
}

#[utoipa::path(
    patch,
    path = "/api/mentees/{id}",
    params(
        ("id" = String, Path, description = "Mentee ID")
    ),
    request_body = UpdateMenteeRequest,
    responses(
        (status = 200, description = "Mentee updated", body = MenteeResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Mentee not found")
    ),
    tag = "mentees"
)]
pub async fn update_mentee(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMenteeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let mentee = services::update_mentee(db.pool(), &id, &req)
        .await
        .map_err(WebError::not_found(NOT_FOUND))?;

    Ok(Json(MenteeResponse::from(mentee)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/mentees/{id}",
    params(
        ("id" = String, Path, description = "Mentee ID")
    ),
    responses(
        (status = 200, description = "Mentee deleted", body = MessageResponse),
        (status = 404, description = "Mentee not found")
    ),
    tag = "mentees"
)]
pub async fn delete_mentee(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_mentee(db.pool(), &id)
        .await
        .map_err(WebError::not_found(NOT_FOUND))?;

    Ok(Json(MessageResponse::new("Mentee deleted successfully.")).into_response())
}
