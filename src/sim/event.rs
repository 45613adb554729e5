use std::f64::consts::TAU;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Orbital events
// ---------------------------------------------------------------------------

/// Kinematic state of one body at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub time: f64,              // s
    pub position: Vector2<f64>, // m
    pub velocity: Vector2<f64>, // m/s
}

/// Kinds of orbital events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Perihelion,
    Aphelion,
    Revolution { count: u32 },
    Custom(String),
}

/// An event observed for a named body.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub body: String,
    pub kind: EventKind,
    pub snapshot: Snapshot,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive snapshots of one body and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Snapshot, current: &Snapshot) -> Option<EventKind>;
}

/// Detects closest and farthest approach to a fixed center
/// (radial velocity changing sign).
pub struct ApsisDetector {
    pub center: Vector2<f64>,
}

impl ApsisDetector {
    pub fn new(center: Vector2<f64>) -> Self {
        Self { center }
    }

    fn radial_rate(&self, s: &Snapshot) -> f64 {
        (s.position - self.center).dot(&s.velocity)
    }
}

impl EventDetector for ApsisDetector {
    fn check(&mut self, prev: &Snapshot, current: &Snapshot) -> Option<EventKind> {
        let before = self.radial_rate(prev);
        let after = self.radial_rate(current);
        if before < 0.0 && after >= 0.0 {
            Some(EventKind::Perihelion)
        } else if before > 0.0 && after <= 0.0 {
            Some(EventKind::Aphelion)
        } else {
            None
        }
    }
}

/// Counts full turns around a fixed center by accumulating swept angle.
pub struct RevolutionDetector {
    pub center: Vector2<f64>,
    swept: f64, // rad, unsigned
    count: u32,
}

impl RevolutionDetector {
    pub fn new(center: Vector2<f64>) -> Self {
        Self { center, swept: 0.0, count: 0 }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl EventDetector for RevolutionDetector {
    fn check(&mut self, prev: &Snapshot, current: &Snapshot) -> Option<EventKind> {
        let a = prev.position - self.center;
        let b = current.position - self.center;
        let cross = a.x * b.y - a.y * b.x;
        self.swept += cross.atan2(a.dot(&b)).abs();

        if self.swept >= TAU * f64::from(self.count + 1) {
            self.count += 1;
            Some(EventKind::Revolution { count: self.count })
        } else {
            None
        }
    }
}
