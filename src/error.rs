use thiserror::Error;

/// Errors raised while building or loading a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("body '{name}' has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body '{name}' has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("system already has primary '{existing}', cannot add primary '{rejected}'")]
    DuplicatePrimary { existing: String, rejected: String },

    #[error("timestep must be finite and positive, got {dt}")]
    InvalidTimestep { dt: f64 },

    #[error("invalid scenario: {0}")]
    Scenario(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for SimError {
    fn from(err: serde_yaml::Error) -> Self {
        SimError::Scenario(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
