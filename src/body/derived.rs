use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::physics::{AU, G, SECONDS_PER_DAY};

/// Descriptive orbital quantities relative to the primary.
///
/// `semi_major_axis_au` is the instantaneous radial distance in AU. It equals
/// the true semi-major axis only for circular orbits; eccentric orbits show a
/// time-varying value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Derived {
    pub distance_to_primary: f64, // m
    pub speed: f64,               // m/s
    pub semi_major_axis_au: f64,  // AU
    pub orbital_period_days: f64, // days, circular-orbit Kepler estimate
}

impl Derived {
    /// Recompute every field from the current state.
    pub(crate) fn refresh(
        &mut self,
        position: &Vector2<f64>,
        velocity: &Vector2<f64>,
        primary_position: &Vector2<f64>,
        primary_mass: f64,
    ) {
        self.speed = velocity.norm();
        self.distance_to_primary = (position - primary_position).norm();
        self.semi_major_axis_au = self.distance_to_primary / AU;

        if self.semi_major_axis_au > 0.0 {
            self.orbital_period_days =
                kepler_period(self.distance_to_primary, primary_mass) / SECONDS_PER_DAY;
        }
    }
}

/// Period of a circular orbit of radius `r` around `central_mass` (s).
pub fn kepler_period(r: f64, central_mass: f64) -> f64 {
    2.0 * PI * (r.powi(3) / (G * central_mass)).sqrt()
}
