pub mod mentee;
pub mod training_plan;
pub mod workout;
