use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{Page, PaginationParams},
        workout::{CreateWorkoutRequest, WorkoutResponse},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/history",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of workouts, newest first", body = Page<WorkoutResponse>),
        (status = 400, description = "Invalid page or page_size")
    ),
    tag = "history"
)]
pub async fn list_history(
    State(db): State<Database>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let page = services::list_history(db.pool(), params).await?;

    Ok(Json(page.map(WorkoutResponse::from)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/history",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout logged", body = WorkoutResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "history"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let workout = services::create_workout(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}
