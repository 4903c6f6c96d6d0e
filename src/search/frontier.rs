//! Cost-bucketed priority frontier.
//!
//! A priority queue over floating-point keys where many points can share
//! one exact key, which is common when costs or heuristics are integral
//! or otherwise degenerate. Selecting a minimum-priority point stays
//! amortized-logarithmic in the number of live keys, not points.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::Point;

/// Heap key ordered by `f64::total_cmp`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PriorityKey(f64);

impl Eq for PriorityKey {}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The set of discovered-but-unexpanded points, bucketed by priority.
///
/// A min-heap of keys is paired with a map from each key's bit pattern
/// to the points filed under that exact priority. Draining a bucket
/// leaves its heap key stale, and recreating the priority adds a
/// duplicate key. Stale keys are skipped the next time the minimum is
/// requested.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<PriorityKey>>,
    buckets: HashMap<u64, HashSet<Point>>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `point` under `priority`, merging into an existing bucket when
    /// one is live at that exact key.
    ///
    /// Callers must not record one point under two different live
    /// priorities; the search algorithms instead leave stale entries in
    /// place and skip already-finalized points on pop.
    pub fn insert_or_merge(&mut self, priority: f64, point: Point) {
        let bucket = self.buckets.entry(priority.to_bits()).or_insert_with(|| {
            self.heap.push(Reverse(PriorityKey(priority)));
            HashSet::new()
        });
        bucket.insert(point);
    }

    /// Smallest live priority and its bucket, or `None` when empty.
    pub fn peek_min(&mut self) -> Option<(f64, &HashSet<Point>)> {
        self.skim();
        let key = self.heap.peek()?.0 .0;
        let bucket = &self.buckets[&key.to_bits()];
        Some((key, bucket))
    }

    /// Remove and return one point from the minimum-priority bucket,
    /// discarding the bucket once it drains.
    pub fn pop_min_point(&mut self) -> Option<(f64, Point)> {
        self.skim();
        let key = self.heap.peek()?.0 .0;
        let bits = key.to_bits();
        let bucket = self.buckets.get_mut(&bits)?;
        let point = *bucket.iter().next()?;
        bucket.remove(&point);
        if bucket.is_empty() {
            // The heap key goes stale here and is skimmed off later.
            self.buckets.remove(&bits);
        }
        Some((key, point))
    }

    /// Remove and return the minimum priority with its entire bucket,
    /// whether or not the caller drained it first.
    pub fn pop_min_bucket(&mut self) -> Option<(f64, HashSet<Point>)> {
        self.skim();
        let Reverse(key) = self.heap.pop()?;
        let bucket = self.buckets.remove(&key.0.to_bits()).unwrap_or_default();
        Some((key.0, bucket))
    }

    /// Whether a bucket is live at this exact priority.
    pub fn contains_priority(&self, priority: f64) -> bool {
        self.buckets.contains_key(&priority.to_bits())
    }

    /// Whether no points remain.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of live buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// All points currently resident, in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.buckets.values().flatten()
    }

    /// Drop heap keys whose bucket is gone, so the heap top is live.
    fn skim(&mut self) {
        while let Some(&Reverse(key)) = self.heap.peek() {
            if self.buckets.contains_key(&key.0.to_bits()) {
                break;
            }
            self.heap.pop();
        }
    }
}
