//! A record of the chain tip over time, the data behind a traced path.

use std::collections::VecDeque;

use crate::epicycles::Epicycles;
use crate::path::Point2;

/// Collects tip positions as playback advances.
///
/// Unbounded by default; with a capacity it behaves like a fading tail and
/// discards the oldest points. The trace is pure data for a renderer to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipTrace {
    points: VecDeque<Point2>,
    capacity: Option<usize>,
}

impl TipTrace {
    /// An unbounded trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace keeping at most `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Record the chain's tip at its clock's current time.
    pub fn record(&mut self, epicycles: &Epicycles) {
        self.push(epicycles.current_tip());
    }

    /// Append a point, dropping the oldest ones past the capacity.
    pub fn push(&mut self, point: Point2) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = Point2> + '_ {
        self.points.iter().copied()
    }

    pub fn last(&self) -> Option<Point2> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
