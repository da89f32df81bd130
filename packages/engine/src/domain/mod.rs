//! Domain value types shared by every system.

pub mod bool_pair;
pub mod edges;
pub mod error;
pub mod settings;
pub mod vec2;

pub use bool_pair::BoolPair;
pub use edges::{Bounds, Edges};
pub use error::BodyError;
pub use settings::BodySettings;
pub use vec2::{round_half_up, Vector};
