//! YAML scenario files.
//!
//! A scenario names the step configuration and the initial bodies, in order:
//!
//! ```yaml
//! sim:
//!   dt: 86400.0               # s, optional
//!   update_mode: sequential   # or "simultaneous", optional
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.98892e30
//!     primary: true
//!     radius: 30
//!     color: [255, 255, 0]
//!   - name: Earth
//!     x: -1.496e11            # m
//!     vy: 29783.0             # m/s
//!     mass: 5.9742e24
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::body::{Appearance, Body, BodyBuilder};
use crate::error::Result;
use crate::sim::{SimConfig, System};

#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub x: f64, // m
    #[serde(default)]
    pub y: f64, // m
    #[serde(default)]
    pub vx: f64, // m/s
    #[serde(default)]
    pub vy: f64, // m/s
    pub mass: f64, // kg
    #[serde(default)]
    pub primary: bool,
    pub radius: Option<f64>,
    pub color: Option<[u8; 3]>,
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body> {
        let look = Appearance::default();
        BodyBuilder::new(self.name.clone())
            .position(self.x, self.y)
            .velocity(self.vx, self.vy)
            .mass(self.mass)
            .radius(self.radius.unwrap_or(look.radius))
            .color(self.color.unwrap_or(look.color))
            .primary(self.primary)
            .build()
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub sim: SimConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate the step configuration and every body, then assemble the system.
    pub fn build_system(&self) -> Result<System> {
        self.sim.validate()?;
        let bodies = self.bodies.iter().map(BodyConfig::build).collect::<Result<Vec<_>>>()?;
        System::with_bodies(self.sim, bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::sim::UpdateMode;

    const TWO_BODY: &str = "
sim:
  update_mode: simultaneous
bodies:
  - name: Sun
    mass: 1.98892e30
    primary: true
    radius: 30
    color: [255, 255, 0]
  - name: Earth
    x: -1.496e11
    vy: 29783.0
    mass: 5.9742e24
";

    #[test]
    fn loads_two_body_scenario() {
        let cfg = ScenarioConfig::from_yaml(TWO_BODY).unwrap();
        assert_eq!(cfg.sim.update_mode, UpdateMode::Simultaneous);
        assert_eq!(cfg.sim.dt, 86_400.0);
        let system = cfg.build_system().unwrap();
        assert_eq!(system.bodies().len(), 2);
        assert_eq!(system.primary().unwrap().appearance().color, [255, 255, 0]);
        assert_eq!(system.body("Earth").unwrap().velocity().y, 29_783.0);
    }

    #[test]
    fn two_primaries_fail_to_build() {
        let yaml = "
bodies:
  - { name: A, mass: 1.0, primary: true }
  - { name: B, mass: 1.0, primary: true }
";
        let cfg = ScenarioConfig::from_yaml(yaml).unwrap();
        assert!(matches!(cfg.build_system(), Err(SimError::DuplicatePrimary { .. })));
    }

    #[test]
    fn unusable_timesteps_fail_to_build() {
        for dt in [".nan", "0", "-86400.0", ".inf"] {
            let yaml = format!(
                "sim: {{ dt: {dt} }}\nbodies:\n  - {{ name: Sun, mass: 1.98892e30, primary: true }}\n"
            );
            let cfg = ScenarioConfig::from_yaml(&yaml).unwrap();
            assert!(
                matches!(cfg.build_system(), Err(SimError::InvalidTimestep { .. })),
                "dt {} accepted",
                dt
            );
        }
    }

    #[test]
    fn malformed_yaml_is_a_scenario_error() {
        let err = ScenarioConfig::from_yaml("bodies: 12");
        assert!(matches!(err, Err(SimError::Scenario(_))));
    }
}
