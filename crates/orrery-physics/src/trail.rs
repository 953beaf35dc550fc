//! Bounded position history used to draw motion trails

use glam::DVec2;
use std::collections::VecDeque;

/// FIFO of the most recent positions of a body.
///
/// The capacity is fixed at creation; pushing onto a full trail evicts the
/// oldest point.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest point, if any
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// Consecutive point pairs from oldest to newest
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.iter().zip(self.iter().skip(1))
    }
}
