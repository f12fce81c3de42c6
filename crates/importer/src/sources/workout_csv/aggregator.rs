use std::collections::HashMap;

use chrono::NaiveDateTime;
use storage::dto::workout::CreateWorkoutRequest;
use storage::models::WorkoutSet;

use super::models::CsvWorkoutRow;
use super::parser::{optional_text, parse_float, parse_int, parse_timestamp, text};

/// Why a row did not contribute to any workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingField,
    InvalidTimestamp,
    Unreadable,
}

/// Groups log rows into workouts keyed by their (start, end) timestamps.
///
/// The first row seen for a key fixes the title, date and duration; every row
/// adds one set. Workouts come out in the order their key was first seen.
#[derive(Debug, Default)]
pub struct WorkoutAggregator {
    index: HashMap<(NaiveDateTime, NaiveDateTime), usize>,
    workouts: Vec<CreateWorkoutRequest>,
    rows_read: usize,
    rows_skipped: usize,
}

#[derive(Debug)]
pub struct AggregationReport {
    pub workouts: Vec<CreateWorkoutRequest>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

impl AggregationReport {
    pub fn set_count(&self) -> usize {
        self.workouts.iter().map(|w| w.workout_sets.len()).sum()
    }
}

impl WorkoutAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into its workout.
    pub fn push(&mut self, row: &CsvWorkoutRow) -> Result<(), SkipReason> {
        self.rows_read += 1;

        let result = self.try_push(row);
        if result.is_err() {
            self.rows_skipped += 1;
        }
        result
    }

    /// Count a row that could not even be decoded.
    pub fn skip_unreadable(&mut self) {
        self.rows_read += 1;
        self.rows_skipped += 1;
    }

    fn try_push(&mut self, row: &CsvWorkoutRow) -> Result<(), SkipReason> {
        let title = text(row.title.as_deref());
        let start_raw = text(row.start_time.as_deref());
        let end_raw = text(row.end_time.as_deref());
        if title.is_empty() || start_raw.is_empty() || end_raw.is_empty() {
            return Err(SkipReason::MissingField);
        }

        let (Some(start), Some(end)) = (parse_timestamp(&start_raw), parse_timestamp(&end_raw))
        else {
            return Err(SkipReason::InvalidTimestamp);
        };

        let position = *self.index.entry((start, end)).or_insert_with(|| {
            self.workouts.push(new_workout(title, start, end));
            self.workouts.len() - 1
        });
        let workout = &mut self.workouts[position];

        let set = WorkoutSet {
            exercise_title: text(row.exercise_title.as_deref()),
            superset_id: parse_int(row.superset_id.as_deref()),
            exercise_notes: optional_text(row.exercise_notes.as_deref()),
            set_index: parse_int(row.set_index.as_deref()).unwrap_or(0),
            set_type: text(row.set_type.as_deref()),
            weight_kg: parse_float(row.weight_kg.as_deref()),
            reps: parse_int(row.reps.as_deref()),
        };

        if let Some(volume) = set.volume() {
            workout.volume_kg += volume;
        }
        workout.workout_sets.push(set);
        workout.sets += 1;

        Ok(())
    }

    pub fn finish(self) -> AggregationReport {
        AggregationReport {
            workouts: self.workouts,
            rows_read: self.rows_read,
            rows_skipped: self.rows_skipped,
        }
    }
}

fn new_workout(title: String, start: NaiveDateTime, end: NaiveDateTime) -> CreateWorkoutRequest {
    let minutes = (end - start).num_minutes().max(0);

    CreateWorkoutRequest {
        title,
        workout_date: start.date(),
        duration_minutes: i32::try_from(minutes).unwrap_or(i32::MAX),
        volume_kg: 0.0,
        sets: 0,
        workout_sets: Vec::new(),
        start_time: Some(start),
        end_time: Some(end),
    }
}
