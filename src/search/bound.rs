use crate::api::Key;
use crate::util::bsearch::{first, last};
use log::trace;

/// Smallest index whose key is strictly greater than `target`.
pub fn find_gt_index<T, K, F>(items: &[T], target: K, mut key: F) -> Option<usize>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    if items.is_empty() {
        return None;
    }
    first(0, items.len() - 1, |idx| key(&items[idx], idx) > target)
}

/// Smallest element whose key is strictly greater than `target`.
pub fn find_gt<'a, T, K, F>(items: &'a [T], target: K, key: F) -> Option<&'a T>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_gt_index(items, target, key).map(|idx| &items[idx])
}

/// Smallest index whose key is greater than or equal to `target`.
pub fn find_gte_index<T, K, F>(items: &[T], target: K, mut key: F) -> Option<usize>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    if items.is_empty() {
        return None;
    }
    first(0, items.len() - 1, |idx| key(&items[idx], idx) >= target)
}

pub fn find_gte<'a, T, K, F>(items: &'a [T], target: K, key: F) -> Option<&'a T>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_gte_index(items, target, key).map(|idx| &items[idx])
}

/// Largest index whose key is strictly less than `target`.
pub fn find_lt_index<T, K, F>(items: &[T], target: K, mut key: F) -> Option<usize>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    if items.is_empty() {
        return None;
    }
    last(0, items.len() - 1, |idx| key(&items[idx], idx) < target)
}

pub fn find_lt<'a, T, K, F>(items: &'a [T], target: K, key: F) -> Option<&'a T>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_lt_index(items, target, key).map(|idx| &items[idx])
}

/// Index of the nearest key that is less than or equal to `target`.
///
/// If some key equals `target`, this is the first index of that equal run.
/// Otherwise it is the largest index whose key is strictly less than `target`
/// (the last of its run, should that key be duplicated).
pub fn find_lte_index<T, K, F>(items: &[T], target: K, mut key: F) -> Option<usize>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    let head = key(items.first()?, 0);
    if head > target {
        return None;
    }

    let mut lo = 0;
    let mut hi = items.len() - 1;

    // Keys already projected next to the window: at `lo - 1` and at `hi`.
    let mut below: Option<(usize, K)> = None;
    let mut edge: Option<(usize, K)> = None;
    let mut project = |idx: usize, known: [Option<(usize, K)>; 2]| {
        if idx == 0 {
            return head;
        }
        for (at, k) in known.iter().flatten() {
            if *at == idx {
                return *k;
            }
        }
        key(&items[idx], idx)
    };

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let mid_key = project(mid, [below, edge]);

        if mid_key > target {
            hi = match mid.checked_sub(1) {
                Some(idx) => idx,
                None => break,
            };
            edge = None;
        } else if mid_key < target {
            below = Some((mid, mid_key));
            lo = mid + 1;
        } else {
            // Equal run is contiguous: only the key right before it matters.
            if mid == 0 {
                return Some(0);
            }
            let prev = mid - 1;
            let prev_key = project(prev, [below, edge]);
            if prev_key < target {
                trace!("lte: target={:?} first of run at {}", target, mid);
                return Some(mid);
            }
            edge = Some((prev, prev_key));
            hi = prev;
        }
    }

    trace!("lte: target={:?} no exact match, below at {}", target, hi);
    Some(hi)
}

/// Element with the nearest key less than or equal to `target`.
///
/// See [`find_lte_index`] for which element of an equal run is picked.
pub fn find_lte<'a, T, K, F>(items: &'a [T], target: K, key: F) -> Option<&'a T>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_lte_index(items, target, key).map(|idx| &items[idx])
}
