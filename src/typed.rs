use std::ops::RangeInclusive;

use anyhow::Context;

use crate::api::Key;
use crate::{search, util};

/// Sorted slice bundled with the projection it is sorted by.
pub struct Sorted<'a, T, F> {
    items: &'a [T],
    key: F,
}

impl<'a, T, K, F> Sorted<'a, T, F>
where
    K: Key,
    F: Fn(&T, usize) -> K,
{
    /// Wrap `items` after verifying that projected keys are finite and non-decreasing.
    pub fn new(items: &'a [T], key: F) -> anyhow::Result<Self> {
        util::check(items, &key).with_context(|| format!("{} items are not sorted", items.len()))?;
        Ok(Self { items, key })
    }

    /// Wrap `items` as is, trusting the caller that they are sorted.
    pub fn unchecked(items: &'a [T], key: F) -> Self {
        Self { items, key }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element with the lowest key, or none if empty.
    pub fn min(&self) -> Option<&'a T> {
        self.items.first()
    }

    /// Element with the highest key, or none if empty.
    pub fn max(&self) -> Option<&'a T> {
        self.items.last()
    }

    pub fn find_index(&self, target: K) -> Option<usize> {
        search::find_index(self.items, target, &self.key)
    }

    pub fn find(&self, target: K) -> Option<&'a T> {
        search::find(self.items, target, &self.key)
    }

    /// Element with the key nearest to `target` (lower one on ties).
    pub fn closest(&self, target: K) -> Option<&'a T> {
        search::find_closest(self.items, target, &self.key)
    }

    /// Smallest element with key strictly greater than `target`.
    pub fn above(&self, target: K) -> Option<&'a T> {
        search::find_gt(self.items, target, &self.key)
    }

    /// Smallest element with key greater than or equal to `target`.
    pub fn ceil(&self, target: K) -> Option<&'a T> {
        search::find_gte(self.items, target, &self.key)
    }

    /// Biggest element with key strictly less than `target`.
    pub fn below(&self, target: K) -> Option<&'a T> {
        search::find_lt(self.items, target, &self.key)
    }

    /// Nearest element with key less than or equal to `target`, first of an equal run.
    pub fn floor(&self, target: K) -> Option<&'a T> {
        search::find_lte(self.items, target, &self.key)
    }

    pub fn span(&self, start: K, end: K) -> Option<RangeInclusive<usize>> {
        search::find_indices_between(self.items, start, end, &self.key)
    }

    pub fn between(&self, start: K, end: K) -> &'a [T] {
        search::find_between(self.items, start, end, &self.key)
    }

    pub fn all(&self, target: K) -> &'a [T] {
        search::find_all(self.items, target, &self.key)
    }
}
