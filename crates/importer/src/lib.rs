pub mod error;
pub mod seeder;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use seeder::{SeedOutcome, force_seed, seed_if_empty, seed_workout_history};
pub use sources::workout_csv::WorkoutCsvImporter;
pub use traits::{ImportContext, ImportSummary, WorkoutImporter};
