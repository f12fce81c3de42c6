use axum::{Router, routing::get};

use super::handlers::{
    create_training_plan, delete_training_plan, get_training_plan, list_training_plans,
    update_training_plan,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_training_plans).post(create_training_plan))
        .route(
            "/:id",
            get(get_training_plan)
                .put(update_training_plan)
                .delete(delete_training_plan),
        )
}
