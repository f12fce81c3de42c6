pub mod auth;
pub mod history;
pub mod mentees;
pub mod training_plans;
