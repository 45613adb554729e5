// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 6.674_28e-11; // gravitational constant, m^3 / (kg s^2)
pub const AU: f64 = 149.6e9; // astronomical unit, m
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SUN_MASS: f64 = 1.988_92e30; // kg

/// Circular orbital speed at radius `r` around a central mass.
pub fn circular_speed(central_mass: f64, r: f64) -> f64 {
    (G * central_mass / r).sqrt()
}
