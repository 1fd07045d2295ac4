//! Rolling weekly aggregates
//!
//! Weekly training volume and workout frequency over a fixed window of
//! Monday-aligned week slots. Every slot in the window is reported,
//! zero-filled, so sparse histories still produce a full-width chart.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::dates::{short_label, week_slots, week_start};
use crate::models::{ExerciseMode, SetRecord, WeekCount, WeeklyVolume, WorkoutFrequency};

/// Total weight-mode volume per week slot over the trailing `weeks`
/// window, oldest first. Time-mode sets never contribute. Always
/// exactly `weeks` entries; a week without sets reports zero volume.
/// Per-slot totals are rounded to the nearest whole unit.
pub fn weekly_volume(sets: &[SetRecord], today: NaiveDate, weeks: usize) -> Vec<WeeklyVolume> {
  let mut totals: BTreeMap<NaiveDate, f64> = week_slots(today, weeks)
    .into_iter()
    .map(|week| (week, 0.0))
    .collect();

  for set in sets {
    if set.exercise_mode != ExerciseMode::Weight {
      continue;
    }
    // Weeks outside the window are absent from the map and ignored.
    if let Some(total) = totals.get_mut(&week_start(set.date)) {
      *total += set.volume();
    }
  }

  totals
    .into_iter()
    .map(|(week, total)| WeeklyVolume {
      week,
      label: short_label(week),
      volume: total.round() as i64,
    })
    .collect()
}

/// Distinct training days per week slot over the trailing `weeks`
/// window. A training day is any date with at least one logged set of
/// any exercise, whatever its mode.
pub fn workout_frequency(sets: &[SetRecord], today: NaiveDate, weeks: usize) -> WorkoutFrequency {
  let slots = week_slots(today, weeks);
  let mut counts: BTreeMap<NaiveDate, i32> = slots.iter().map(|week| (*week, 0)).collect();

  let training_days: BTreeSet<NaiveDate> = sets.iter().map(|s| s.date).collect();
  for day in training_days {
    if let Some(count) = counts.get_mut(&week_start(day)) {
      *count += 1;
    }
  }

  let this_week = slots
    .last()
    .and_then(|week| counts.get(week))
    .copied()
    .unwrap_or(0);
  debug!("{} training days this week across a {}-week window", this_week, weeks);

  WorkoutFrequency {
    this_week,
    by_week: counts
      .into_iter()
      .map(|(week, count)| WeekCount { week, count })
      .collect(),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
