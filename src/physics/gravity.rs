use nalgebra::Vector2;

use super::constants::G;

// ---------------------------------------------------------------------------
// Pairwise Newtonian gravity (2D, direct summation)
// ---------------------------------------------------------------------------

/// Force exerted on a body of mass `mass` at `pos` by a body of mass
/// `other_mass` at `other_pos`, in newtons.
///
/// Coincident positions yield a zero vector instead of a singular force.
pub fn attraction(
    pos: &Vector2<f64>,
    mass: f64,
    other_pos: &Vector2<f64>,
    other_mass: f64,
) -> Vector2<f64> {
    let delta = other_pos - pos;
    let distance = delta.norm();
    if distance == 0.0 {
        return Vector2::zeros();
    }

    let force = G * mass * other_mass / (distance * distance);

    // Decompose along the line of centers
    let theta = delta.y.atan2(delta.x);
    Vector2::new(theta.cos() * force, theta.sin() * force)
}

/// Net force on body `idx` from every other body in `sources`.
/// Each source is a `(position, mass)` pair; `idx` itself is skipped.
pub fn net_force<'a, I>(idx: usize, pos: &Vector2<f64>, mass: f64, sources: I) -> Vector2<f64>
where
    I: IntoIterator<Item = (&'a Vector2<f64>, f64)>,
{
    sources
        .into_iter()
        .enumerate()
        .filter(|(j, _)| *j != idx)
        .fold(Vector2::zeros(), |acc, (_, (other_pos, other_mass))| {
            acc + attraction(pos, mass, other_pos, other_mass)
        })
}
