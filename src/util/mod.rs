use log::debug;
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::error::{Error, Result};
use crate::api::Key;

pub(crate) mod bsearch;

/// Seeded non-decreasing keys with frequent duplicate runs.
pub fn data(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut acc = rng.gen_range(-100..100) as f64;
    (0..count)
        .map(|_| {
            acc += rng.gen_range(0..3) as f64;
            acc
        })
        .collect()
}

/// Verify that projected keys are finite and non-decreasing.
///
/// Searches never call this: sortedness stays a caller-enforced precondition,
/// and this is the O(n) way for a caller to enforce it.
pub fn check<T, K, F>(items: &[T], mut key: F) -> Result<()>
where
    K: Key,
    F: FnMut(&T, usize) -> K,
{
    let mut prev: Option<K> = None;
    for (idx, item) in items.iter().enumerate() {
        let this = key(item, idx);
        if !this.is_finite() {
            debug!("check: non-finite key at {}: {:?}", idx, this);
            return Err(Error::NotFinite(idx, format!("{:?}", this)));
        }
        if let Some(p) = prev {
            if this < p {
                debug!("check: unsorted at {}: {:?} < {:?}", idx, this, p);
                return Err(Error::Unsorted(idx, format!("{:?} after {:?}", this, p)));
            }
        }
        prev = Some(this);
    }
    Ok(())
}
