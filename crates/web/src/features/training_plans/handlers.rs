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
        training_plan::{TrainingPlanRequest, TrainingPlanResponse},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

const NOT_FOUND: &str = "Training plan not found.";

#[utoipa::path(
    get,
    path = "/api/training-plans",
    params(UserQuery),
    responses(
        (status = 200, description = "Plans created by or assigned to the user", body = Vec<TrainingPlanResponse>),
        (status = 400, description = "Missing user_id")
    ),
    tag = "training-plans"
)]
pub async fn list_training_plans(
    State(db): State<Database>,
    Query(query): Query<UserQuery>,
) -> Result<Response, WebError> {
    let plans = services::list_training_plans(db.pool(), &query.user_id).await?;

    let response: Vec<TrainingPlanResponse> =
        plans.into_iter().map(TrainingPlanResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/training-plans/{id}",
    params(
        ("id" = i64, Path, description = "Training plan ID")
    ),
    responses(
        (status = 200, description = "Training plan found", body = TrainingPlanResponse),
        (status = 404, description = "Training plan not found")
    ),
    tag = "training-plans"
)]
pub async fn get_training_plan(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let plan = services::get_training_plan(db.pool(), id)
        .await
        .map_err(WebError::not_found(NOT_FOUND))?;

    Ok(Json(TrainingPlanResponse::from(plan)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/training-plans",
    request_body = TrainingPlanRequest,
    responses(
        (status = 201, description = "Training plan created", body = TrainingPlanResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "training-plans"
)]
pub async fn create_training_plan(
    State(db): State<Database>,
    Json(req): Json<TrainingPlanRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let plan = services::create_training_plan(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TrainingPlanResponse::from(plan))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/training-plans/{id}",
    params(
        ("id" = i64, Path, description = "Training plan ID")
    ),
    request_body = TrainingPlanRequest,
    responses(
        (status = 200, description = "Training plan replaced", body = TrainingPlanResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Training plan not found")
    ),
    tag = "training-plans"
)]
pub async fn update_training_plan(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<TrainingPlanRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let plan = services::update_training_plan(db.pool(), id, &req)
        .await
        .map_err(WebError::not_found(NOT_FOUND))?;

    Ok(Json(TrainingPlanResponse::from(plan)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/training-plans/{id}",
    params(
        ("id" = i64, Path, description = "Training plan ID")
    ),
    responses(
        (status = 200, description = "Training plan deleted", body = MessageResponse),
        (status = 404, description = "Training plan not found")
    ),
    tag = "training-plans"
)]
pub async fn delete_training_plan(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_training_plan(db.pool(), id)
        .await
        .map_err(WebError::not_found(NOT_FOUND))?;

    Ok(Json(MessageResponse::new("Training plan deleted successfully.")).into_response())
}
