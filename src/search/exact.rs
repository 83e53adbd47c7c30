use crate::api::Key;
use crate::util::bsearch::locate;
use std::cmp::Ordering;

/// Index of an element whose key equals `target`, if any.
///
/// With duplicate keys any index of the equal run may be returned.
pub fn find_index<T, K, F>(items: &[T], target: K, mut key: F) -> Option<usize>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    if items.is_empty() {
        return None;
    }
    locate(0, items.len() - 1, |idx| {
        key(&items[idx], idx)
            .partial_cmp(&target)
            .unwrap_or(Ordering::Greater)
    })
}

/// Element whose key equals `target`, if any.
///
/// `items` must be sorted by the key the projection returns.
pub fn find<'a, T, K, F>(items: &'a [T], target: K, key: F) -> Option<&'a T>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_index(items, target, key).map(|idx| &items[idx])
}

/// Index of the element whose key is nearest to `target`.
///
/// When `target` is exactly halfway between two neighbours the lower index wins.
pub fn find_closest_index<T, K, F>(items: &[T], target: K, mut key: F) -> Option<usize>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    if items.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = items.len() - 1;

    // Keys already projected at the window edges.
    let mut lo_key: Option<(usize, K)> = None;
    let mut hi_key: Option<(usize, K)> = None;
    let mut project = |idx: usize, known: [Option<(usize, K)>; 2]| {
        for (at, k) in known.iter().flatten() {
            if *at == idx {
                return *k;
            }
        }
        key(&items[idx], idx)
    };

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let mid_key = project(mid, [lo_key, hi_key]);
        if mid_key == target {
            return Some(mid);
        }

        let next = mid + 1;
        let next_key = project(next, [lo_key, hi_key]);
        if mid_key < target && target < next_key {
            return if target.distance(mid_key) <= target.distance(next_key) {
                Some(mid)
            } else {
                Some(next)
            };
        }

        if target < mid_key {
            hi = mid;
            hi_key = Some((mid, mid_key));
        } else {
            lo = next;
            lo_key = Some((next, next_key));
        }
    }

    Some(lo)
}

/// Element whose key is nearest to `target` (lower one on ties).
pub fn find_closest<'a, T, K, F>(items: &'a [T], target: K, key: F) -> Option<&'a T>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    find_closest_index(items, target, key).map(|idx| &items[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(x: &f64, _: usize) -> f64 {
        *x
    }

    const XS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn test_find() {
        assert_eq!(find(&XS, 2.0, id), Some(&2.0));
        assert_eq!(find(&XS, 2.5, id), None);
        assert_eq!(find(&XS, -2.0, id), None);
        assert_eq!(find(&XS, 10.0, id), None);
        assert_eq!(find(&XS, 1.0, id), Some(&1.0));
        assert_eq!(find(&XS, 5.0, id), Some(&5.0));
        assert_eq!(find(&[], 1.0, id), None);
        assert_eq!(find(&[7.0], 7.0, id), Some(&7.0));
    }

    #[test]
    fn test_find_index_duplicates() {
        let xs = [1, 2, 3, 3, 3, 4, 5];
        let idx = find_index(&xs, 3, |x, _| *x).unwrap();
        assert!((2..=4).contains(&idx));
        assert_eq!(xs[idx], 3);
    }

    #[test]
    fn test_find_logarithmic() {
        let xs: Vec<u32> = (0..1000).collect();

        let mut calls = 0;
        let found = find(&xs, 0, |x, _| {
            calls += 1;
            *x
        });
        assert_eq!(found, Some(&0));
        assert_eq!(calls, 9);

        let mut calls = 0;
        let found = find(&xs, 499, |x, _| {
            calls += 1;
            *x
        });
        assert_eq!(found, Some(&499));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_find_by_position() {
        let names = ["a", "b", "c", "d"];
        assert_eq!(find(&names, 2usize, |_, i| i), Some(&"c"));
        assert_eq!(find(&names, 4usize, |_, i| i), None);
    }

    #[test]
    fn test_find_closest() {
        assert_eq!(find_closest_index(&XS, 2.5, id), Some(1));
        assert_eq!(find_closest_index(&XS, 2.6, id), Some(2));
        assert_eq!(find_closest_index(&XS, 2.4, id), Some(1));
        assert_eq!(find_closest_index(&XS, 3.0, id), Some(2));
        assert_eq!(find_closest_index(&XS, -10.0, id), Some(0));
        assert_eq!(find_closest_index(&XS, 10.0, id), Some(4));
        assert_eq!(find_closest_index(&[], 1.0, id), None);
        assert_eq!(find_closest_index(&[4.0], -1.0, id), Some(0));

        assert_eq!(find_closest(&XS, 4.4, id), Some(&4.0));
        assert_eq!(find_closest(&XS, 4.5, id), Some(&4.0));
        assert_eq!(find_closest(&XS, 4.51, id), Some(&5.0));
    }

    #[test]
    fn test_find_closest_ties_lower() {
        let xs = [0, 10, 20, 30];
        assert_eq!(find_closest_index(&xs, 5, |x, _| *x), Some(0));
        assert_eq!(find_closest_index(&xs, 15, |x, _| *x), Some(1));
        assert_eq!(find_closest_index(&xs, 25, |x, _| *x), Some(2));
        assert_eq!(find_closest_index(&xs, 26, |x, _| *x), Some(3));

        let xs = [1u32, 3];
        assert_eq!(find_closest_index(&xs, 2, |x, _| *x), Some(0));
    }

    #[test]
    fn test_find_closest_projects_once() {
        let xs: Vec<f64> = (0..1000).map(|x| x as f64 * 2.0).collect();
        for target in [-5.0, 0.0, 1.0, 333.0, 1001.0, 1998.0, 5000.0].iter() {
            let mut seen = Vec::new();
            find_closest_index(&xs, *target, |x, i| {
                seen.push(i);
                *x
            });
            let mut dedup = seen.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), seen.len(), "target={}", target);
        }
    }
}
