use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::WebError;

use super::services::{AuthHealthResponse, TokenExchange, TokenRequest};

#[utoipa::path(
    post,
    path = "/api/auth/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Tokens issued by the identity provider, relayed as received"),
        (status = 400, description = "Missing code or rejected by the provider"),
        (status = 500, description = "Provider not configured or unreachable")
    ),
    tag = "auth"
)]
pub async fn exchange_token(
    State(auth): State<Arc<TokenExchange>>,
    Json(req): Json<TokenRequest>,
) -> Result<Response, WebError> {
    let tokens = auth.exchange(&req).await?;

    Ok(Json(tokens).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/health",
    responses(
        (status = 200, description = "Whether the identity provider is configured", body = AuthHealthResponse)
    ),
    tag = "auth"
)]
pub async fn auth_health(State(auth): State<Arc<TokenExchange>>) -> Json<AuthHealthResponse> {
    Json(auth.health())
}
