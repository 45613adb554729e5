pub mod csv;
pub mod info;
pub mod json;
pub mod scenario;

pub use info::BodyInfo;
pub use scenario::{BodyConfig, ScenarioConfig};
