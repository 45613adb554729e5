pub mod clock;
pub mod config;
pub mod event;
pub mod runner;
pub mod system;

pub use clock::{TimeControl, TIME_SPEEDS};
pub use config::{SimConfig, UpdateMode};
pub use event::{EventDetector, EventKind, SimEvent, Snapshot};
pub use runner::{default_watches, simulate, simulate_with, Watch};
pub use system::System;
