use nalgebra::Vector2;

use crate::body::Body;
use crate::physics::AU;

// ---------------------------------------------------------------------------
// World (m) -> screen (px) mapping for presentation layers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,            // px per m
    pub center: Vector2<f64>,  // screen position of the world origin, px
}

impl Viewport {
    pub fn new(scale: f64, center: Vector2<f64>) -> Self {
        Self { scale, center }
    }

    /// Fit `span_au` astronomical units into `pixels` pixels, centered in a
    /// `width` x `height` window.
    pub fn fit(width: f64, height: f64, pixels: f64, span_au: f64) -> Self {
        Self {
            scale: pixels / (span_au * AU),
            center: Vector2::new(width / 2.0, height / 2.0),
        }
    }

    pub fn to_screen(&self, world: &Vector2<f64>) -> Vector2<f64> {
        world * self.scale + self.center
    }

    pub fn to_world(&self, screen: &Vector2<f64>) -> Vector2<f64> {
        (screen - self.center) / self.scale
    }

    /// Index of the first body whose displayed disc contains `point` (screen px).
    pub fn index_at(&self, point: &Vector2<f64>, bodies: &[Body]) -> Option<usize> {
        bodies.iter().position(|b| {
            let screen = self.to_screen(b.position());
            (screen - point).norm() <= b.appearance().radius
        })
    }

    /// First body whose displayed disc contains `point` (screen px).
    pub fn body_at<'a>(&self, point: &Vector2<f64>, bodies: &'a [Body]) -> Option<&'a Body> {
        self.index_at(point, bodies).map(|i| &bodies[i])
    }
}

impl Default for Viewport {
    /// 250 px per AU in an 800 x 800 window.
    fn default() -> Self {
        Self::fit(800.0, 800.0, 250.0, 1.0)
    }
}
