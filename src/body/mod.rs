pub mod builder;
pub mod derived;
pub mod trail;

pub use builder::BodyBuilder;
pub use derived::{kepler_period, Derived};
pub use trail::{OrbitTrail, TRAIL_CAPACITY};

use nalgebra::Vector2;

use crate::error::{Result, SimError};
use crate::physics::gravity;

// ---------------------------------------------------------------------------
// Display metadata (stored and forwarded, never interpreted here)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub radius: f64,    // display radius, px
    pub color: [u8; 3], // RGB
}

impl Default for Appearance {
    fn default() -> Self {
        Self { radius: 8.0, color: [255, 255, 255] }
    }
}

// ---------------------------------------------------------------------------
// Motion role
// ---------------------------------------------------------------------------

/// Per-body state that only exists for bodies the integrator moves.
#[derive(Debug, Clone, Default)]
pub struct Orbit {
    pub trail: OrbitTrail,
    pub derived: Derived,
}

/// The primary stays fixed; orbiting bodies carry a trail and derived state.
#[derive(Debug, Clone)]
pub enum Motion {
    Primary,
    Orbiting(Orbit),
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    position: Vector2<f64>, // m
    velocity: Vector2<f64>, // m/s
    mass: f64,              // kg
    appearance: Appearance,
    motion: Motion,
}

impl Body {
    /// Fixed central body. Its velocity is stored as zero and never updated.
    pub fn primary(
        name: impl Into<String>,
        position: Vector2<f64>,
        mass: f64,
        appearance: Appearance,
    ) -> Result<Self> {
        let velocity = Vector2::zeros();
        Self::validated(name.into(), position, velocity, mass, appearance, Motion::Primary)
    }

    pub fn orbiting(
        name: impl Into<String>,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        appearance: Appearance,
    ) -> Result<Self> {
        Self::validated(
            name.into(),
            position,
            velocity,
            mass,
            appearance,
            Motion::Orbiting(Orbit::default()),
        )
    }

    fn validated(
        name: String,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        appearance: Appearance,
        motion: Motion,
    ) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass { name, mass });
        }
        if !(position.iter().all(|c| c.is_finite()) && velocity.iter().all(|c| c.is_finite())) {
            return Err(SimError::NonFiniteState { name });
        }
        Ok(Self { name, position, velocity, mass, appearance, motion })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &Vector2<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Vector2<f64> {
        &self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn is_primary(&self) -> bool {
        matches!(self.motion, Motion::Primary)
    }

    /// Position history; `None` for the primary.
    pub fn trail(&self) -> Option<&OrbitTrail> {
        match &self.motion {
            Motion::Orbiting(orbit) => Some(&orbit.trail),
            Motion::Primary => None,
        }
    }

    /// Orbital quantities as of the last completed step; `None` for the primary.
    pub fn derived(&self) -> Option<&Derived> {
        match &self.motion {
            Motion::Orbiting(orbit) => Some(&orbit.derived),
            Motion::Primary => None,
        }
    }

    /// Gravitational force exerted by `other` on `self` (N).
    pub fn compute_attraction(&self, other: &Body) -> Vector2<f64> {
        gravity::attraction(&self.position, self.mass, &other.position, other.mass)
    }

    /// Sum attractions from `others` (which must not contain `self`) and
    /// advance one step. No-op for the primary.
    pub fn update_position<'a, I>(&mut self, others: I, dt: f64)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        if self.is_primary() {
            return;
        }
        let force = others
            .into_iter()
            .fold(Vector2::zeros(), |acc, other| acc + self.compute_attraction(other));
        self.integrate(&force, dt);
    }

    /// Euler-Cromer update under a precomputed net force: velocity first,
    /// then position with the new velocity. No-op for the primary.
    pub fn integrate(&mut self, force: &Vector2<f64>, dt: f64) {
        let Motion::Orbiting(orbit) = &mut self.motion else {
            return;
        };
        self.velocity += force / self.mass * dt;
        self.position += self.velocity * dt;
        orbit.trail.push(self.position);
    }

    /// Recompute distance, speed, semi-major axis and period relative to the
    /// primary. No-op for the primary itself.
    pub fn refresh_derived_quantities(
        &mut self,
        primary_position: &Vector2<f64>,
        primary_mass: f64,
    ) {
        if let Motion::Orbiting(orbit) = &mut self.motion {
            orbit
                .derived
                .refresh(&self.position, &self.velocity, primary_position, primary_mass);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{AU, G, SECONDS_PER_DAY, SUN_MASS};

    fn sun() -> Body {
        Body::primary("Sun", Vector2::zeros(), SUN_MASS, Appearance::default()).unwrap()
    }

    fn earth() -> Body {
        Body::orbiting(
            "Earth",
            Vector2::new(-AU, 0.0),
            Vector2::new(0.0, 29_783.0),
            5.9742e24,
            Appearance::default(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_non_positive_mass() {
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let look = Appearance::default();
            let err = Body::orbiting("Rock", Vector2::zeros(), Vector2::zeros(), mass, look);
            assert!(
                matches!(err, Err(SimError::NonPositiveMass { .. })),
                "mass {} accepted",
                mass
            );
        }
    }

    #[test]
    fn rejects_non_finite_position() {
        let pos = Vector2::new(f64::NAN, 0.0);
        let err = Body::primary("Sun", pos, SUN_MASS, Appearance::default());
        assert!(matches!(err, Err(SimError::NonFiniteState { .. })));
    }

    #[test]
    fn attraction_points_at_primary() {
        let s = sun();
        let e = earth();
        let f = e.compute_attraction(&s);
        let expected = G * SUN_MASS * 5.9742e24 / (AU * AU);
        assert!(f.x > 0.0);
        assert!(f.y.abs() < 1e-6 * f.x);
        assert!((f.norm() - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn primary_is_never_moved() {
        let mut s = sun();
        let e = earth();
        s.update_position([&e], SECONDS_PER_DAY);
        s.integrate(&Vector2::new(1e30, 1e30), SECONDS_PER_DAY);
        assert_eq!(*s.position(), Vector2::zeros());
        assert_eq!(*s.velocity(), Vector2::zeros());
        assert!(s.trail().is_none());
    }

    #[test]
    fn velocity_updates_before_position() {
        let mut body =
            Body::orbiting("Probe", Vector2::zeros(), Vector2::zeros(), 2.0, Appearance::default())
                .unwrap();
        body.integrate(&Vector2::new(4.0, 0.0), 1.0);
        // v = 0 + 4/2 * 1 = 2, x = 0 + 2 * 1 = 2 (explicit Euler would leave x at 0)
        assert_eq!(body.velocity().x, 2.0);
        assert_eq!(body.position().x, 2.0);
        assert_eq!(body.trail().map(|t| t.len()), Some(1));
    }

    #[test]
    fn derived_quantities_refresh_from_state() {
        let s = sun();
        let mut e = earth();
        assert_eq!(e.derived().map(|d| d.distance_to_primary), Some(0.0));
        e.refresh_derived_quantities(s.position(), s.mass());
        let d = e.derived().unwrap();
        assert!((d.distance_to_primary - AU).abs() < 1.0);
        assert!((d.orbital_period_days - 365.0).abs() < 0.02 * 365.0);
    }
}
