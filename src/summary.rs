//! Per-exercise summaries and workout recaps
//!
//! The exercise grid shows, for every exercise ever logged, its latest
//! tracked value and a short trend of recent per-day peaks. The recap
//! totals reduce a single workout's sets to the numbers shown on its
//! card.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::grouping::group_by;
use crate::models::{ExerciseMode, ExerciseSummary, SetRecord, WorkoutTotals};

/// One summary per exercise with at least one logged set, sorted most
/// recently trained first. The sparkline holds per-date peak values for
/// up to `sparkline_points` most recent training days, in chronological
/// order, never padded.
pub fn exercise_summaries(sets: &[SetRecord], sparkline_points: usize) -> Vec<ExerciseSummary> {
  let mut summaries = Vec::new();

  for (exercise_id, exercise_sets) in group_by(sets, |s| s.exercise_id.clone()) {
    // Name and mode are constant across a group; read them from the
    // first record.
    let first = exercise_sets[0];

    // Peak tracked value per distinct date, ascending by date.
    let daily_peaks: Vec<(NaiveDate, f64)> = group_by(&exercise_sets, |s| s.date)
      .into_iter()
      .map(|(date, day_sets)| {
        let peak = day_sets.iter().map(|s| s.tracked_value()).fold(0.0, f64::max);
        (date, peak)
      })
      .collect();

    let Some(&(last_used_date, latest_value)) = daily_peaks.last() else {
      continue;
    };

    let start = daily_peaks.len().saturating_sub(sparkline_points);
    let sparkline = daily_peaks[start..].iter().map(|(_, peak)| *peak).collect();

    summaries.push(ExerciseSummary {
      exercise_id,
      exercise_name: first.exercise_name.clone(),
      exercise_mode: first.exercise_mode,
      latest_value,
      unit: first.exercise_mode.unit().to_string(),
      sparkline,
      last_used_date,
    });
  }

  summaries.sort_by(|a, b| b.last_used_date.cmp(&a.last_used_date));
  debug!("summarized {} exercises", summaries.len());
  summaries
}

/// Reduce one workout's sets to its recap numbers. Time-mode sets count
/// toward the set and exercise counts but never toward volume.
pub fn workout_totals(sets: &[SetRecord]) -> WorkoutTotals {
  let total_volume: f64 = sets
    .iter()
    .filter(|s| s.exercise_mode == ExerciseMode::Weight)
    .map(SetRecord::volume)
    .sum();

  let exercise_count = sets
    .iter()
    .map(|s| s.exercise_id.as_str())
    .collect::<BTreeSet<_>>()
    .len() as i32;

  WorkoutTotals {
    total_volume,
    exercise_count,
    set_count: sets.len() as i32,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
