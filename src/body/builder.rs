use nalgebra::Vector2;

use super::{Appearance, Body};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Body builder
// ---------------------------------------------------------------------------

pub struct BodyBuilder {
    name: String,
    position: Vector2<f64>,
    velocity: Vector2<f64>,
    mass: f64,
    appearance: Appearance,
    primary: bool,
}

impl BodyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector2::zeros(),
            velocity: Vector2::zeros(),
            mass: 1.0,
            appearance: Appearance::default(),
            primary: false,
        }
    }

    pub fn position(mut self, x: f64, y: f64) -> Self { self.position = Vector2::new(x, y); self }
    pub fn velocity(mut self, vx: f64, vy: f64) -> Self { self.velocity = Vector2::new(vx, vy); self }
    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn radius(mut self, v: f64) -> Self { self.appearance.radius = v; self }
    pub fn color(mut self, rgb: [u8; 3]) -> Self { self.appearance.color = rgb; self }
    pub fn primary(mut self, v: bool) -> Self { self.primary = v; self }

    /// Validates mass and state. A primary ignores any velocity set here.
    pub fn build(self) -> Result<Body> {
        if self.primary {
            Body::primary(self.name, self.position, self.mass, self.appearance)
        } else {
            Body::orbiting(self.name, self.position, self.velocity, self.mass, self.appearance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn builds_orbiting_body() {
        let body = BodyBuilder::new("Mars")
            .position(-2.0e11, 0.0)
            .velocity(0.0, 24_077.0)
            .mass(6.39e23)
            .radius(12.0)
            .color([188, 39, 50])
            .build()
            .unwrap();
        assert!(!body.is_primary());
        assert_eq!(body.velocity().y, 24_077.0);
        assert_eq!(body.appearance().color, [188, 39, 50]);
    }

    #[test]
    fn primary_drops_velocity() {
        let body = BodyBuilder::new("Sun")
            .velocity(1.0, 1.0)
            .mass(1.0e30)
            .primary(true)
            .build()
            .unwrap();
        assert!(body.is_primary());
        assert_eq!(*body.velocity(), Vector2::zeros());
    }

    #[test]
    fn zero_mass_is_rejected() {
        let err = BodyBuilder::new("Ghost").mass(0.0).build();
        assert!(matches!(err, Err(SimError::NonPositiveMass { .. })));
    }
}
