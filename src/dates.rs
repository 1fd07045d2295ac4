//! Calendar math for week-aligned aggregation
//!
//! All keys are `chrono::NaiveDate`. ISO `YYYY-MM-DD` string ordering
//! and `NaiveDate` ordering agree, so comparisons here match the
//! lexicographic comparisons the upstream store performs on its date
//! columns.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
  date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Monday keys of the `weeks` most recent week slots, oldest first,
/// ending with the week containing `today`. Zero weeks yields nothing.
pub fn week_slots(today: NaiveDate, weeks: usize) -> Vec<NaiveDate> {
  let current = week_start(today);
  (0..weeks)
    .rev()
    .map(|back| current - Duration::weeks(back as i64))
    .collect()
}

/// Short human rendering of a date key, e.g. "Jan 5"
pub fn short_label(date: NaiveDate) -> String {
  date.format("%b %-d").to_string()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  fn date(key: &str) -> NaiveDate {
    key.parse().expect("valid test date")
  }

  #[test]
  fn test_week_start_aligns_to_monday() {
    // 2024-01-10 is a Wednesday
    assert_eq!(week_start(date("2024-01-10")), date("2024-01-08"));
    // A Monday maps to itself
    assert_eq!(week_start(date("2024-01-08")), date("2024-01-08"));
    // A Sunday belongs to the week that started six days earlier
    assert_eq!(week_start(date("2024-01-14")), date("2024-01-08"));
  }

  #[test]
  fn test_week_start_crosses_month_boundary() {
    // 2024-03-01 is a Friday; its week starts in February
    assert_eq!(week_start(date("2024-03-01")), date("2024-02-26"));
  }

  #[test]
  fn test_week_slots_count_and_order() {
    let slots = week_slots(date("2024-03-20"), 4);

    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0], date("2024-02-26"));
    assert_eq!(slots[3], date("2024-03-18"), "last slot is the current week");
    assert!(slots.windows(2).all(|w| w[0] < w[1]), "slots must ascend");
  }

  #[test]
  fn test_week_slots_zero_weeks() {
    assert!(week_slots(date("2024-03-20"), 0).is_empty());
  }

  #[test]
  fn test_short_label_drops_zero_padding() {
    assert_eq!(short_label(date("2024-01-05")), "Jan 5");
    assert_eq!(short_label(date("2024-12-25")), "Dec 25");
  }
}
