//! Systems - everything that changes body state over time.

pub mod kinematics;
pub mod player;
