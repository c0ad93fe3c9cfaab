//! Bounded per-identity centroid trails.

use std::collections::{HashMap, VecDeque};

use super::Point;

/// Centroid history per identity, each capped at `capacity` points.
///
/// Appending past capacity drops the oldest point, so memory stays at
/// O(identities * capacity) however long the session runs.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    trails: HashMap<u64, VecDeque<Point>>,
    capacity: usize,
}

impl TrajectoryBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trails: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push a centroid, returning the point evicted to make room, if any.
    pub fn append(&mut self, identity: u64, centroid: Point) -> Option<Point> {
        let capacity = self.capacity;
        let trail = self
            .trails
            .entry(identity)
            .or_insert_with(|| VecDeque::with_capacity(capacity));

        trail.push_back(centroid);
        if trail.len() > capacity {
            trail.pop_front()
        } else {
            None
        }
    }

    /// Points of `identity`'s trail, oldest first.
    pub fn points(&self, identity: u64) -> impl Iterator<Item = &Point> {
        self.trails.get(&identity).into_iter().flatten()
    }

    /// Consecutive point pairs for line drawing; empty under two points.
    pub fn segments(&self, identity: u64) -> Vec<(Point, Point)> {
        match self.trails.get(&identity) {
            Some(trail) => trail
                .iter()
                .zip(trail.iter().skip(1))
                .map(|(&p, &q)| (p, q))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn remove(&mut self, identity: u64) -> bool {
        self.trails.remove(&identity).is_some()
    }

    pub fn clear(&mut self) {
        self.trails.clear();
    }

    /// Number of identities with a trail.
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}
