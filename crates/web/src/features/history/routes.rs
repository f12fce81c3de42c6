use axum::{Router, routing::get};

use super::handlers::{create_workout, list_history};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_history).post(create_workout))
}
