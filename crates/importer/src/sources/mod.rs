pub mod workout_csv;
