use axum::{
    Router,
    routing::{get, patch, post},
};

use super::handlers::{
    accept_invitation, create_mentee, delete_mentee, list_mentees, update_mentee,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mentees).post(create_mentee))
        .route("/accept-invitation/:invite_key", post(accept_invitation))
        .route("/:id", patch(update_mentee).delete(delete_mentee))
}
