//! Derived analytics entities
//!
//! Everything here is recomputed fresh from the full record set on each
//! call and serialized with the field names the consuming view layer
//! expects (camelCase where it reads them that way).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::set::ExerciseMode;

/// Per-date aggregate for one exercise's history.
///
/// Both the weight pair (`max_weight`, `total_volume`) and the time
/// pair (`max_time`, `total_time`) are computed; only the pair matching
/// the exercise's mode is meaningful and surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
  pub date: NaiveDate,
  pub label: String,
  pub max_weight: f64,
  pub total_volume: f64,
  pub max_time: i64,
  pub total_time: i64,
}

/// A best-ever value matched or beaten within the recency window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
  pub exercise_id: String,
  pub exercise_name: String,
  pub value: f64,
  pub unit: String,
  pub date: NaiveDate,
}

/// Total training volume for one Monday-aligned week slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
  pub week: NaiveDate,
  pub label: String,
  pub volume: i64,
}

/// Distinct training days in one Monday-aligned week slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCount {
  pub week: NaiveDate,
  pub count: i32,
}

/// Training-day counts over the rolling window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutFrequency {
  pub this_week: i32,
  pub by_week: Vec<WeekCount>,
}

/// Latest tracked value and recent trend for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
  pub exercise_id: String,
  pub exercise_name: String,
  pub exercise_mode: ExerciseMode,
  pub latest_value: f64,
  pub unit: String,
  pub sparkline: Vec<f64>,
  pub last_used_date: NaiveDate,
}

/// One bodyweight measurement prepared for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyweightPoint {
  pub date: NaiveDate,
  pub label: String,
  pub weight: f64,
}

/// Recap numbers for a single workout's sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTotals {
  pub total_volume: f64,
  pub exercise_count: i32,
  pub set_count: i32,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_chart_point_serializes_camel_case() {
    let point = ChartDataPoint {
      date: "2024-01-01".parse().unwrap(),
      label: "Jan 1".to_string(),
      max_weight: 100.0,
      total_volume: 1300.0,
      max_time: 0,
      total_time: 0,
    };

    let json = serde_json::to_string(&point).unwrap();
    for key in ["\"date\"", "\"label\"", "\"maxWeight\"", "\"totalVolume\"", "\"maxTime\"", "\"totalTime\""] {
      assert!(json.contains(key), "missing {} in {}", key, json);
    }
  }

  #[test]
  fn test_personal_record_wire_keys() {
    let record = PersonalRecord {
      exercise_id: "ex-1".to_string(),
      exercise_name: "Bench Press".to_string(),
      value: 200.0,
      unit: "lbs".to_string(),
      date: "2024-02-10".parse().unwrap(),
    };

    let json = serde_json::to_string(&record).unwrap();
    for key in ["\"exerciseId\"", "\"exerciseName\"", "\"value\"", "\"unit\"", "\"date\""] {
      assert!(json.contains(key), "missing {} in {}", key, json);
    }
    assert!(json.contains("\"2024-02-10\""), "date must serialize as an ISO key");
  }

  #[test]
  fn test_summary_round_trips_through_json() {
    let summary = ExerciseSummary {
      exercise_id: "squat".to_string(),
      exercise_name: "Back Squat".to_string(),
      exercise_mode: ExerciseMode::Weight,
      latest_value: 225.0,
      unit: "lbs".to_string(),
      sparkline: vec![185.0, 205.0, 225.0],
      last_used_date: "2024-03-01".parse().unwrap(),
    };

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"lastUsedDate\""));
    let back: ExerciseSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
  }
}
