use crate::domain::{BodyError, BodySettings, BoolPair, Bounds, Edges, Vector};

use super::collision::check_for_collisions;
use super::interpolate::{advance, interpolate_position, StepReport};
use super::motion::Motion;
use super::shape::{Part, Shape};

/// A single moving rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicBody {
    part: Part,
    motion: Motion,
}

impl KinematicBody {
    pub fn new(settings: &BodySettings) -> Result<Self, BodyError> {
        let size = checked_size(settings.size)?;
        Ok(Self {
            part: Part::new(Vector::zero(), size),
            motion: Motion::new(settings.position, settings.velocity, settings.acceleration),
        })
    }

    /// Rectangle at `position` with the default velocity and gravity.
    pub fn rect(position: Vector, size: Vector) -> Result<Self, BodyError> {
        Self::new(&BodySettings::at(position, size))
    }

    #[inline]
    pub fn size(&self) -> Vector {
        self.part.size
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.motion.position()
    }

    #[inline]
    pub fn unrounded_position(&self) -> Vector {
        self.motion.unrounded_position()
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.motion.velocity
    }

    #[inline]
    pub fn acceleration(&self) -> Vector {
        self.motion.acceleration
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    pub fn reset_update_timer(&mut self, now: f64) {
        self.motion.reset_update_timer(now);
    }

    /// Advance to `timestamp` (ms), colliding against `obstacles`.
    pub fn update<O: Bounds>(&mut self, timestamp: f64, obstacles: &[O]) -> StepReport {
        advance(&mut self.motion, std::slice::from_ref(&self.part), timestamp, obstacles)
    }

    /// Move by `displacement` through `obstacles` without touching velocity.
    pub fn interpolate_position<O: Bounds>(&mut self, displacement: Vector, obstacles: &[O]) -> StepReport {
        interpolate_position(&mut self.motion, std::slice::from_ref(&self.part), displacement, obstacles)
    }

    /// Axes of `vector` blocked at the current position.
    pub fn check_for_collisions<O: Bounds>(&self, obstacles: &[O], vector: Vector) -> BoolPair {
        check_for_collisions(
            std::slice::from_ref(&self.part),
            self.motion.position(),
            obstacles,
            vector,
            self.motion.previous_step(),
        )
    }
}

impl Shape for KinematicBody {
    fn parts(&self) -> &[Part] {
        std::slice::from_ref(&self.part)
    }

    fn anchor(&self) -> Vector {
        self.motion.position()
    }
}

impl Bounds for KinematicBody {
    fn edges(&self) -> Edges {
        self.part.edges_at(self.motion.position())
    }
}

pub(crate) fn checked_size(size: Vector) -> Result<Vector, BodyError> {
    if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(size)
    } else {
        Err(BodyError::InvalidSize { width: size.x, height: size.y })
    }
}
