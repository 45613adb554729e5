use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::physics::SECONDS_PER_DAY;

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

/// How bodies observe each other within a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Bodies are advanced one at a time in insertion order; later bodies
    /// feel the already-moved positions of earlier ones.
    #[default]
    Sequential,
    /// All forces are taken from the pre-step positions, then every body moves.
    Simultaneous,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64, // integration timestep, s
    pub update_mode: UpdateMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: SECONDS_PER_DAY, // one simulated day per step
            update_mode: UpdateMode::Sequential,
        }
    }
}

impl SimConfig {
    /// Reject timesteps that would stall, reverse or poison the integration.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimestep { dt: self.dt });
        }
        Ok(())
    }
}
