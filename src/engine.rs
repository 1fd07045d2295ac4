//! One-call dashboard computation
//!
//! Mirrors how the progress screen consumes the engine: fetch the full
//! flattened set history once, derive every card from it in a single
//! call, serialize for the view layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ExerciseSummary, PersonalRecord, SetRecord, WeeklyVolume, WorkoutFrequency};
use crate::records::personal_records;
use crate::summary::exercise_summaries;
use crate::weekly::{weekly_volume, workout_frequency};

/// ---------------------------------------------------------------------------
/// Window Configuration
/// ---------------------------------------------------------------------------

/// Window parameters for the rolling computations. The defaults match
/// the dashboard: a 30-day record window, 12-week charts, 10-point
/// sparklines. All overridable by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
  pub pr_window_days: i64,
  pub rolling_weeks: usize,
  pub sparkline_points: usize,
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      pr_window_days: 30,
      rolling_weeks: 12,
      sparkline_points: 10,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Progress Report
/// ---------------------------------------------------------------------------

/// Everything the progress dashboard renders, derived from one slice of
/// set records. Recomputed fresh on every call; the engine keeps no
/// state between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
  pub personal_records: Vec<PersonalRecord>,
  pub weekly_volume: Vec<WeeklyVolume>,
  pub frequency: WorkoutFrequency,
  pub exercise_summaries: Vec<ExerciseSummary>,
}

impl ProgressReport {
  /// Run every dashboard computation over the full set history.
  /// `today` anchors the rolling windows; the engine never reads the
  /// system clock.
  pub fn compute(sets: &[SetRecord], today: NaiveDate, config: &ReportConfig) -> Self {
    debug!(
      "computing progress report: {} sets, today {}, {}-day record window, {}-week charts",
      sets.len(),
      today,
      config.pr_window_days,
      config.rolling_weeks
    );

    Self {
      personal_records: personal_records(sets, today, config.pr_window_days),
      weekly_volume: weekly_volume(sets, today, config.rolling_weeks),
      frequency: workout_frequency(sets, today, config.rolling_weeks),
      exercise_summaries: exercise_summaries(sets, config.sparkline_points),
    }
  }

  /// Serialize for the view layer
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
