// Bounded movement history per hand and direction

use std::collections::VecDeque;

use crate::core::geometry;
use crate::models::swipe::SwipeDirection;

/// Newest-first window of movement magnitudes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccumulatorWindow {
    entries: VecDeque<f32>,
}

impl AccumulatorWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_newest(&mut self, magnitude: f32) {
        self.entries.push_front(magnitude);
    }

    pub fn pop_oldest(&mut self) -> Option<f32> {
        self.entries.pop_back()
    }

    /// Drop the oldest entries until at most `capacity` remain
    pub fn truncate(&mut self, capacity: usize) {
        self.entries.truncate(capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn sum(&self) -> f32 {
        geometry::sum(self.entries.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.entries.iter()
    }
}

/// The `in` and `out` windows of one hand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandAccumulator {
    inward: AccumulatorWindow,
    outward: AccumulatorWindow,
}

impl HandAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self, direction: SwipeDirection) -> &AccumulatorWindow {
        match direction {
            SwipeDirection::In => &self.inward,
            SwipeDirection::Out => &self.outward,
        }
    }

    fn window_mut(&mut self, direction: SwipeDirection) -> &mut AccumulatorWindow {
        match direction {
            SwipeDirection::In => &mut self.inward,
            SwipeDirection::Out => &mut self.outward,
        }
    }

    /// Record a classified movement. The opposite direction decays by one
    /// entry and the matching window is capped at `capacity`.
    pub fn record(&mut self, direction: SwipeDirection, magnitude: f32, capacity: usize) {
        let window = self.window_mut(direction);
        window.push_newest(magnitude.abs());
        window.truncate(capacity);
        self.window_mut(direction.opposite()).pop_oldest();
    }

    /// Drop the oldest entry of both windows
    pub fn decay(&mut self) {
        self.inward.pop_oldest();
        self.outward.pop_oldest();
    }

    pub fn clear(&mut self) {
        self.inward.clear();
        self.outward.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inward.is_empty() && self.outward.is_empty()
    }
}
