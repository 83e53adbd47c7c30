//! Binary searches over slices sorted by a caller-supplied numeric key.
//!
//! Keys are never materialized: each search projects only the positions it
//! probes, through a `(element, index) -> key` function. "Not found" is always
//! `None` or an empty slice.
//!
//! ```
//! use yabsearch::{find_all_indices, find_gte, find_lte};
//!
//! let xs = [1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0];
//! assert_eq!(find_gte(&xs, 2.5, |x, _| *x), Some(&3.0));
//! assert_eq!(find_lte(&xs, 0.0, |x, _| *x), None);
//! assert_eq!(find_all_indices(&xs, 3.0, |x, _| *x), Some(2..=4));
//! ```

pub mod api;
pub mod search;
#[cfg(feature = "typed")]
pub mod typed;
pub mod util;

pub use api::error::{Error, Result};
pub use api::Key;
pub use search::*;
#[cfg(feature = "typed")]
pub use typed::Sorted;
