//! Input records for the analytics engine
//!
//! The upstream data layer joins logged sets with their exercise
//! metadata and flattens the rows into these shapes, ordered by
//! creation time ascending. The engine never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Exercise Mode
/// ---------------------------------------------------------------------------

/// Per-exercise classification deciding which set fields carry meaning:
/// `Weight` exercises track weight x reps, `Time` exercises track a
/// duration in seconds stored in the `reps` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseMode {
  #[default]
  Weight,
  Time,
}

impl ExerciseMode {
  /// Display unit for values tracked under this mode
  pub fn unit(self) -> &'static str {
    match self {
      ExerciseMode::Weight => "lbs",
      ExerciseMode::Time => "sec",
    }
  }
}

impl std::fmt::Display for ExerciseMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ExerciseMode::Weight => write!(f, "weight"),
      ExerciseMode::Time => write!(f, "time"),
    }
  }
}

impl std::str::FromStr for ExerciseMode {
  type Err = ParseModeError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "weight" => Ok(ExerciseMode::Weight),
      "time" => Ok(ExerciseMode::Time),
      other => Err(ParseModeError(other.to_string())),
    }
  }
}

/// A mode column held something other than "weight" or "time"
#[derive(Debug, thiserror::Error)]
#[error("unknown exercise mode: {0}")]
pub struct ParseModeError(String);

/// ---------------------------------------------------------------------------
/// Set Records
/// ---------------------------------------------------------------------------

/// One logged set, flattened with its exercise metadata.
///
/// `reps` is overloaded: repetition count for weight exercises,
/// duration in seconds for time exercises. `weight` is always 0 for
/// time exercises and is never read in that mode. All records sharing
/// an `exercise_id` carry the same name and mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRecord {
  pub date: NaiveDate,
  pub weight: f64,
  pub reps: i64,
  pub exercise_id: String,
  pub exercise_name: String,
  pub exercise_mode: ExerciseMode,
}

impl SetRecord {
  /// The value this exercise is judged by: weight lifted, or seconds held
  pub fn tracked_value(&self) -> f64 {
    match self.exercise_mode {
      ExerciseMode::Weight => self.weight,
      ExerciseMode::Time => self.reps as f64,
    }
  }

  /// Training volume contributed by this set (weight x reps)
  pub fn volume(&self) -> f64 {
    self.weight * self.reps as f64
  }
}

/// One logged bodyweight measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyweightEntry {
  pub date: NaiveDate,
  pub weight: f64,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
