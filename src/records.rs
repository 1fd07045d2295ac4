//! Personal-record detection
//!
//! Compares each exercise's best recent value against its all-time
//! best. Matching the all-time best inside the window still counts as a
//! record. The emitted date is the first recent set achieving the best,
//! which is deterministic because upstream rows arrive in creation
//! order.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::grouping::group_by;
use crate::models::{PersonalRecord, SetRecord};

/// Find every exercise whose best value inside the trailing
/// `window_days` window matches or beats its all-time best. Zero-valued
/// maxima never qualify. Output is sorted most recent record first.
pub fn personal_records(
  sets: &[SetRecord],
  today: NaiveDate,
  window_days: i64,
) -> Vec<PersonalRecord> {
  let cutoff = today - Duration::days(window_days);
  let mut records = Vec::new();

  for (_, exercise_sets) in group_by(sets, |s| s.exercise_id.clone()) {
    let all_time_max = exercise_sets
      .iter()
      .map(|s| s.tracked_value())
      .fold(0.0, f64::max);

    // Best value inside the window, and the first set achieving it.
    // Later sets that merely tie the running best do not take over.
    let mut recent_max = 0.0_f64;
    let mut record_set: Option<&SetRecord> = None;
    for set in exercise_sets.iter().copied().filter(|s| s.date >= cutoff) {
      let value = set.tracked_value();
      if value > recent_max {
        recent_max = value;
        record_set = Some(set);
      }
    }

    // Covers both "not trained inside the window" and "only zero-valued
    // sets in the window" - neither produces a record.
    let Some(record_set) = record_set else {
      continue;
    };

    if recent_max >= all_time_max {
      // Name, mode and unit are constant across the group; read them
      // from the record-setting row.
      records.push(PersonalRecord {
        exercise_id: record_set.exercise_id.clone(),
        exercise_name: record_set.exercise_name.clone(),
        value: recent_max,
        unit: record_set.exercise_mode.unit().to_string(),
        date: record_set.date,
      });
    }
  }

  records.sort_by(|a, b| b.date.cmp(&a.date));
  debug!(
    "{} personal records inside the {}-day window",
    records.len(),
    window_days
  );
  records
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
