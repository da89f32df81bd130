//! Body settings - tunables for players and blocks
//!
//! Missing fields fall back to the defaults below, so a settings document
//! can be as small as `{}`.

use serde::{Deserialize, Serialize};

use super::error::BodyError;
use super::vec2::Vector;

/// Edge length of a default square body, in pixels.
pub const SQUARE_SIZE: f64 = 100.0;
/// Downward acceleration applied to a default body (px/s²).
pub const GRAVITY: f64 = 700.0;
/// Horizontal speed while a move intent is held (px/s).
pub const WALKING_SPEED: f64 = 250.0;
/// Initial upward speed of a jump (px/s).
pub const JUMPING_SPEED: f64 = 600.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodySettings {
    pub size: Vector,
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    pub walking_speed: f64,
    pub jumping_speed: f64,
}

impl Default for BodySettings {
    fn default() -> Self {
        Self {
            size: Vector::new(SQUARE_SIZE, SQUARE_SIZE),
            position: Vector::zero(),
            velocity: Vector::zero(),
            acceleration: Vector::new(0.0, GRAVITY),
            walking_speed: WALKING_SPEED,
            jumping_speed: JUMPING_SPEED,
        }
    }
}

impl BodySettings {
    pub fn from_json(json: &str) -> Result<Self, BodyError> {
        let settings: BodySettings = serde_json::from_str(json)?;
        Ok(settings)
    }

    pub fn at(position: Vector, size: Vector) -> Self {
        Self { position, size, ..Self::default() }
    }
}
