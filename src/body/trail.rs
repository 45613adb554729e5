use std::collections::VecDeque;

use nalgebra::Vector2;

/// Number of past positions kept per body.
pub const TRAIL_CAPACITY: usize = 1000;

/// Bounded history of positions, oldest first.
///
/// Storage is allocated once; when full, each push evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct OrbitTrail {
    points: VecDeque<Vector2<f64>>,
    capacity: usize,
}

impl OrbitTrail {
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vector2<f64>) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
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

    /// Points in insertion order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vector2<f64>> + ExactSizeIterator {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<&Vector2<f64>> {
        self.points.front()
    }

    pub fn latest(&self) -> Option<&Vector2<f64>> {
        self.points.back()
    }
}

impl Default for OrbitTrail {
    fn default() -> Self {
        Self::new()
    }
}
