mod mentee;
mod training_plan;
mod workout;

pub use mentee::Mentee;
pub use training_plan::TrainingPlan;
pub use workout::{Workout, WorkoutSet};
