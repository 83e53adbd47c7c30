use crate::api::Key;
use crate::util::bsearch::{first, last, locate};
use log::trace;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Indices of the contiguous run of elements whose keys fall within `start..=end`.
///
/// None when `items` is empty, when `start > end`, or when no key qualifies.
pub fn find_indices_between<T, K, F>(
    items: &[T],
    start: K,
    end: K,
    mut key: F,
) -> Option<RangeInclusive<usize>>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    if items.is_empty() || start > end {
        return None;
    }
    let n = items.len() - 1;

    let lo = first(0, n, |idx| key(&items[idx], idx) >= start)?;
    let hi = last(lo, n, |idx| key(&items[idx], idx) <= end);
    trace!("between: start={:?} end={:?} lo={} hi={:?}", start, end, lo, hi);

    hi.map(|hi| lo..=hi)
}

/// Elements whose keys fall within `start..=end` (empty if there are none).
pub fn find_between<'a, T, K, F>(items: &'a [T], start: K, end: K, key: F) -> &'a [T]
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    match find_indices_between(items, start, end, key) {
        Some(span) => &items[span],
        None => &[],
    }
}

/// First and last index of the run of keys equal to `target`.
pub fn find_all_indices<T, K, F>(items: &[T], target: K, key: F) -> Option<RangeInclusive<usize>>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_indices_between(items, target, target, key)
}

pub fn find_all<'a, T, K, F>(items: &'a [T], target: K, key: F) -> &'a [T]
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_between(items, target, target, key)
}

/// Index of an element whose closed interval `[start(e), end(e)]` contains `value`.
///
/// Intervals are expected to be non-overlapping and ordered by start.
pub fn find_range_item_index<T, K, S, E>(
    items: &[T],
    value: K,
    mut start: S,
    mut end: E,
) -> Option<usize>
where
    K: Key,
    S: FnMut(&T) -> K,
    E: FnMut(&T) -> K,
{
    if items.is_empty() {
        return None;
    }
    locate(0, items.len() - 1, |idx| {
        let item = &items[idx];
        let lo = start(item);
        if value < lo {
            return Ordering::Greater;
        }
        if value <= end(item) {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    })
}

pub fn find_range_item<'a, T, K, S, E>(items: &'a [T], value: K, start: S, end: E) -> Option<&'a T>
where
    K: Key,
    S: FnMut(&T) -> K,
    E: FnMut(&T) -> K,
{
    find_range_item_index(items, value, start, end).map(|idx| &items[idx])
}
