//! Per-exercise daily progress series and bodyweight trend
//!
//! Feeds the detail chart for a single exercise: one point per training
//! day carrying both the weight-mode and time-mode aggregate pairs. The
//! caller surfaces whichever pair matches the exercise's mode.

use crate::dates::short_label;
use crate::grouping::group_by;
use crate::models::{BodyweightEntry, BodyweightPoint, ChartDataPoint, SetRecord};

/// Collapse one exercise's full set history into one point per distinct
/// date, ascending chronologically. Empty input yields an empty series.
pub fn progress_series(sets: &[SetRecord]) -> Vec<ChartDataPoint> {
  group_by(sets, |s| s.date)
    .into_iter()
    .map(|(date, day_sets)| {
      // Weights and reps are non-negative, so zero is a sound identity
      // for both maxima.
      ChartDataPoint {
        date,
        label: short_label(date),
        max_weight: day_sets.iter().map(|s| s.weight).fold(0.0, f64::max),
        total_volume: day_sets.iter().map(|s| s.volume()).sum(),
        max_time: day_sets.iter().map(|s| s.reps).max().unwrap_or(0),
        total_time: day_sets.iter().map(|s| s.reps).sum(),
      }
    })
    .collect()
}

/// Bodyweight entries prepared for charting: ascending by date, with
/// display labels attached. Entries sharing a date keep input order.
pub fn bodyweight_series(entries: &[BodyweightEntry]) -> Vec<BodyweightPoint> {
  let mut points: Vec<BodyweightPoint> = entries
    .iter()
    .map(|e| BodyweightPoint {
      date: e.date,
      label: short_label(e.date),
      weight: e.weight,
    })
    .collect();
  points.sort_by_key(|p| p.date);
  points
}

/// Most recent bodyweight measurement, if any was ever logged. When a
/// date was logged twice the later entry wins, matching how the store
/// returns the newest row for a day.
pub fn latest_bodyweight(entries: &[BodyweightEntry]) -> Option<&BodyweightEntry> {
  entries.iter().max_by_key(|e| e.date)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
