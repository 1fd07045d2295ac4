//! Ordered grouping primitive shared by every aggregation
//!
//! Groups a slice by an arbitrary key, preserving input order inside
//! each bucket. Keyed by calendar date for daily aggregates and by
//! exercise id for per-exercise passes.

use std::collections::BTreeMap;

/// Group `items` by `key`. No item is dropped or duplicated, and each
/// bucket keeps its items in input order. The map iterates in ascending
/// key order, which the callers rely on for chronological output and
/// for deterministic results across invocations.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> BTreeMap<K, Vec<&'a T>>
where
  K: Ord,
  F: Fn(&T) -> K,
{
  let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();
  for item in items {
    groups.entry(key(item)).or_default().push(item);
  }
  groups
}
