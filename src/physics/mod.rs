pub mod constants;
pub mod gravity;

pub use constants::{circular_speed, AU, G, SECONDS_PER_DAY, SUN_MASS};
pub use gravity::{attraction, net_force};
