//! Binary searches over slices sorted by a projected key.
//!
//! Every function takes the slice, the target key(s) and a projection
//! `(element, index) -> key`. The slice must be sorted so that projected keys
//! never decrease; this is not checked here (see [`crate::util::check`]).
//! Each probed position is projected at most once per call.

mod bound;
mod exact;
mod range;

pub use bound::{
    find_gt, find_gt_index, find_gte, find_gte_index, find_lt, find_lt_index, find_lte,
    find_lte_index,
};
pub use exact::{find, find_closest, find_closest_index, find_index};
pub use range::{
    find_all, find_all_indices, find_between, find_indices_between, find_range_item,
    find_range_item_index,
};
