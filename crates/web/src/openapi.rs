use utoipa::OpenApi;

use crate::features::{auth, history, mentees, training_plans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fitness Coaching API",
        description = "Training plans, workout history and mentee management"
    ),
    paths(
        auth::handlers::exchange_token,
        auth::handlers::auth_health,
        history::handlers::list_history,
        history::handlers::create_workout,
        training_plans::handlers::list_training_plans,
        training_plans::handlers::get_training_plan,
        training_plans::handlers::create_training_plan,
        training_plans::handlers::update_training_plan,
        training_plans::handlers::delete_training_plan,
        mentees::handlers::list_mentees,
        mentees::handlers::create_mentee,
        mentees::handlers::accept_invitation,
        mentees::handlers::update_mentee,
        mentees::handlers::delete_mentee,
    ),
    components(
        schemas(
            auth::services::TokenRequest,
            auth::services::AuthHealthResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::WorkoutResponse,
            storage::dto::training_plan::TrainingPlanRequest,
            storage::dto::training_plan::TrainingPlanResponse,
            storage::dto::training_plan::PlanExercise,
            storage::dto::training_plan::PlanSet,
            storage::dto::mentee::CreateMenteeRequest,
            storage::dto::mentee::UpdateMenteeRequest,
            storage::dto::mentee::AcceptInvitationRequest,
            storage::dto::mentee::AcceptInvitationResponse,
            storage::dto::mentee::MenteeResponse,
            storage::dto::common::MessageResponse,
            storage::models::WorkoutSet,
        )
    ),
    tags(
        (name = "auth", description = "Identity provider token exchange"),
        (name = "history", description = "Workout history"),
        (name = "training-plans", description = "Weekly training plans"),
        (name = "mentees", description = "Coached clients and invitations"),
    )
)]
pub struct ApiDoc;
