use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{auth_health, exchange_token};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(exchange_token))
        .route("/health", get(auth_health))
}
