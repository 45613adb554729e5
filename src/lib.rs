pub mod body;
pub mod error;
pub mod io;
pub mod physics;
pub mod presets;
pub mod sim;
pub mod view;

pub use body::{Appearance, Body, BodyBuilder, Derived, Motion, OrbitTrail};
pub use error::{Result, SimError};
pub use sim::{SimConfig, System, TimeControl, UpdateMode};
pub use view::Viewport;
