//! Workout analytics engine
//!
//! Pure, stateless derivation of progress insight from logged strength
//! training sets: per-exercise daily series, personal records, rolling
//! weekly volume, training frequency, and per-exercise summaries with
//! trend sparklines. The upstream data layer fetches and flattens the
//! rows (ordered by creation time ascending) and supplies "today" for
//! the rolling windows; everything here is a synchronous computation
//! over in-memory slices with no I/O, no clock reads, and no retained
//! state.

pub mod dates;
pub mod engine;
pub mod grouping;
pub mod models;
pub mod progress;
pub mod records;
pub mod summary;
pub mod weekly;

#[cfg(test)]
pub mod test_utils;

pub use engine::{ProgressReport, ReportConfig};
pub use models::{
  BodyweightEntry, BodyweightPoint, ChartDataPoint, ExerciseMode, ExerciseSummary, ParseModeError,
  PersonalRecord, SetRecord, WeekCount, WeeklyVolume, WorkoutFrequency, WorkoutTotals,
};
pub use progress::{bodyweight_series, latest_bodyweight, progress_series};
pub use records::personal_records;
pub use summary::{exercise_summaries, workout_totals};
pub use weekly::{weekly_volume, workout_frequency};
