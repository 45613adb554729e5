use nalgebra::Vector2;

use crate::body::Body;
use crate::error::{Result, SimError};
use crate::physics::gravity;
use super::config::{SimConfig, UpdateMode};
use super::event::Snapshot;

// ---------------------------------------------------------------------------
// Ensemble of bodies and the step driver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
    config: SimConfig,
    time: f64,  // simulated seconds since start
    steps: u64,
}

impl System {
    /// Empty system; fails if `config` has an unusable timestep.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { bodies: Vec::new(), config, time: 0.0, steps: 0 })
    }

    /// Build a system from an ordered body list, validating the primary.
    pub fn with_bodies(config: SimConfig, bodies: impl IntoIterator<Item = Body>) -> Result<Self> {
        let mut system = Self::new(config)?;
        for body in bodies {
            system.add_body(body)?;
        }
        Ok(system)
    }

    /// Append a body. At most one primary is accepted.
    pub fn add_body(&mut self, body: Body) -> Result<()> {
        if body.is_primary() {
            if let Some(existing) = self.primary() {
                return Err(SimError::DuplicatePrimary {
                    existing: existing.name().to_string(),
                    rejected: body.name().to_string(),
                });
            }
        }
        self.bodies.push(body);
        self.refresh_derived();
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn primary(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_primary())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replace the step configuration; takes effect from the next step.
    /// The current configuration is kept if `config` is invalid.
    pub fn set_config(&mut self, config: SimConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Simulated time elapsed, s.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Kinematic snapshot of body `idx` at the current time.
    pub fn snapshot(&self, idx: usize) -> Option<Snapshot> {
        self.bodies.get(idx).map(|b| Snapshot {
            time: self.time,
            position: *b.position(),
            velocity: *b.velocity(),
        })
    }

    /// Advance every body by one timestep, then refresh derived quantities.
    pub fn step(&mut self) {
        let dt = self.config.dt;
        match self.config.update_mode {
            UpdateMode::Sequential => self.step_sequential(dt),
            UpdateMode::Simultaneous => self.step_simultaneous(dt),
        }
        self.refresh_derived();
        self.time += dt;
        self.steps += 1;
    }

    /// Run `n` whole steps back to back. `n == 0` does nothing.
    pub fn step_multiple(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    fn step_sequential(&mut self, dt: f64) {
        for i in 0..self.bodies.len() {
            let (before, rest) = self.bodies.split_at_mut(i);
            if let Some((body, after)) = rest.split_first_mut() {
                body.update_position(before.iter().chain(after.iter()), dt);
            }
        }
    }

    fn step_simultaneous(&mut self, dt: f64) {
        let sources: Vec<(Vector2<f64>, f64)> =
            self.bodies.iter().map(|b| (*b.position(), b.mass())).collect();

        let forces: Vec<Vector2<f64>> = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| {
                if b.is_primary() {
                    Vector2::zeros()
                } else {
                    let others = sources.iter().map(|(p, m)| (p, *m));
                    gravity::net_force(i, b.position(), b.mass(), others)
                }
            })
            .collect();

        for (body, force) in self.bodies.iter_mut().zip(forces.iter()) {
            body.integrate(force, dt);
        }
    }

    fn refresh_derived(&mut self) {
        let Some(primary) = self.primary() else {
            return;
        };
        let (primary_pos, primary_mass) = (*primary.position(), primary.mass());
        for body in self.bodies.iter_mut() {
            body.refresh_derived_quantities(&primary_pos, primary_mass);
        }
    }
}
