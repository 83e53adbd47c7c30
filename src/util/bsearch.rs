use std::cmp::Ordering;

/// Three-way binary search over the inclusive window `lo..=hi`.
///
/// `probe(i)` reports how the element at `i` compares to whatever is searched:
/// `Less` moves the window right, `Greater` moves it left, `Equal` stops.
pub(crate) fn locate<F: FnMut(usize) -> Ordering>(
    mut lo: usize,
    mut hi: usize,
    mut probe: F,
) -> Option<usize> {
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match probe(mid) {
            Ordering::Less => {
                lo = mid + 1;
            }
            Ordering::Greater => {
                hi = mid.checked_sub(1)?;
            }
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// Smallest index within `lo..=hi` where `hit` holds.
///
/// `hit` must be monotone over the window: once true, true for every later index.
pub(crate) fn first<F: FnMut(usize) -> bool>(mut lo: usize, mut hi: usize, mut hit: F) -> Option<usize> {
    let mut found = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if hit(mid) {
            found = Some(mid);
            match mid.checked_sub(1) {
                Some(idx) => hi = idx,
                None => break,
            }
        } else {
            lo = mid + 1;
        }
    }
    found
}

/// Largest index within `lo..=hi` where `hit` holds.
///
/// `hit` must be monotone over the window: once false, false for every later index.
pub(crate) fn last<F: FnMut(usize) -> bool>(mut lo: usize, mut hi: usize, mut hit: F) -> Option<usize> {
    let mut found = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if hit(mid) {
            found = Some(mid);
            lo = mid + 1;
        } else {
            match mid.checked_sub(1) {
                Some(idx) => hi = idx,
                None => break,
            }
        }
    }
    found
}
