use crate::body::{Body, BodyBuilder};
use crate::error::Result;
use crate::physics::{AU, SUN_MASS};
use crate::sim::{SimConfig, System};

// ---------------------------------------------------------------------------
// Preset systems
// ---------------------------------------------------------------------------

pub const YELLOW: [u8; 3] = [255, 255, 0];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLUE: [u8; 3] = [100, 149, 237];
pub const RED: [u8; 3] = [188, 39, 50];
pub const DARK_GREY: [u8; 3] = [80, 78, 81];

/// Sun plus the four inner planets, all starting on the x-axis.
pub fn inner_planets() -> Result<Vec<Body>> {
    Ok(vec![
        BodyBuilder::new("Sun")
            .mass(SUN_MASS)
            .radius(30.0)
            .color(YELLOW)
            .primary(true)
            .build()?,
        BodyBuilder::new("Mercury")
            .position(0.387 * AU, 0.0)
            .velocity(0.0, -47.4e3)
            .mass(3.30e23)
            .radius(8.0)
            .color(DARK_GREY)
            .build()?,
        BodyBuilder::new("Venus")
            .position(0.723 * AU, 0.0)
            .velocity(0.0, -35.02e3)
            .mass(4.8685e24)
            .radius(14.0)
            .color(WHITE)
            .build()?,
        BodyBuilder::new("Earth")
            .position(-AU, 0.0)
            .velocity(0.0, 29.783e3)
            .mass(5.9742e24)
            .radius(16.0)
            .color(BLUE)
            .build()?,
        BodyBuilder::new("Mars")
            .position(-1.524 * AU, 0.0)
            .velocity(0.0, 24.077e3)
            .mass(6.39e23)
            .radius(12.0)
            .color(RED)
            .build()?,
    ])
}

/// The inner solar system with the given configuration.
pub fn solar_system(config: SimConfig) -> Result<System> {
    System::with_bodies(config, inner_planets()?)
}
