//! Test fixtures and helpers
//!
//! Mock-data factories for set records and bodyweight entries, plus a
//! float-comparison assertion shared by the module tests.

use chrono::NaiveDate;

use crate::models::{BodyweightEntry, ExerciseMode, SetRecord};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Parse a test date key, panicking on typos in the fixture itself
pub fn date(key: &str) -> NaiveDate {
  key.parse().expect("valid test date")
}

/// A weight-mode set: weight lifted for a number of reps.
/// The exercise id doubles as its display name.
pub fn weight_set(date_key: &str, exercise_id: &str, weight: f64, reps: i64) -> SetRecord {
  SetRecord {
    date: date(date_key),
    weight,
    reps,
    exercise_id: exercise_id.to_string(),
    exercise_name: exercise_id.to_string(),
    exercise_mode: ExerciseMode::Weight,
  }
}

/// A time-mode set: the duration in seconds rides in the reps field
pub fn time_set(date_key: &str, exercise_id: &str, seconds: i64) -> SetRecord {
  SetRecord {
    date: date(date_key),
    weight: 0.0,
    reps: seconds,
    exercise_id: exercise_id.to_string(),
    exercise_name: exercise_id.to_string(),
    exercise_mode: ExerciseMode::Time,
  }
}

/// A bodyweight measurement
pub fn bodyweight(date_key: &str, weight: f64) -> BodyweightEntry {
  BodyweightEntry {
    date: date(date_key),
    weight,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_factories_produce_expected_modes() {
    let bench = weight_set("2024-01-01", "bench", 100.0, 5);
    assert_eq!(bench.exercise_mode, ExerciseMode::Weight);
    crate::assert_approx_eq!(bench.volume(), 500.0, 1e-9);

    let plank = time_set("2024-01-01", "plank", 60);
    assert_eq!(plank.exercise_mode, ExerciseMode::Time);
    assert_eq!(plank.weight, 0.0);
    assert_eq!(plank.tracked_value(), 60.0);

    let entry = bodyweight("2024-01-01", 185.0);
    assert_eq!(entry.date, date("2024-01-01"));
  }
}
