use crate::domain::Vector;

/// Integration state owned by one moving body.
///
/// `position` is always whole pixels and is what collision and rendering
/// read. `unrounded_position` carries the sub-pixel remainder between
/// ticks; outside of a running step loop `position == unrounded_position.rounded()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    pub(crate) position: Vector,
    pub(crate) unrounded_position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    /// Timestamp of the last tick, in milliseconds. `None` until the
    /// first tick or reset, so that tick only sets the baseline.
    pub(crate) last_updated: Option<f64>,
    /// Last nonzero whole-pixel move, used to break corner ties.
    pub(crate) previous_step: Vector,
}

impl Motion {
    pub fn new(position: Vector, velocity: Vector, acceleration: Vector) -> Self {
        Self {
            position: position.rounded(),
            unrounded_position: position,
            velocity,
            acceleration,
            last_updated: None,
            previous_step: Vector::zero(),
        }
    }

    /// A body that never moves.
    pub fn at_rest(position: Vector) -> Self {
        Self::new(position, Vector::zero(), Vector::zero())
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn unrounded_position(&self) -> Vector {
        self.unrounded_position
    }

    #[inline]
    pub fn previous_step(&self) -> Vector {
        self.previous_step
    }

    #[inline]
    pub fn last_updated(&self) -> Option<f64> {
        self.last_updated
    }

    /// Teleport. Drops any sub-pixel remainder and the corner-tie history.
    pub fn set_position(&mut self, position: Vector) {
        self.position = position.rounded();
        self.unrounded_position = position;
        self.previous_step = Vector::zero();
    }

    /// Start measuring elapsed time from `now` (used when resuming from
    /// pause so the first tick doesn't see the whole idle period).
    pub fn reset_update_timer(&mut self, now: f64) {
        if now.is_finite() {
            self.last_updated = Some(now);
        }
    }

    /// Seconds since the last tick; clock anomalies and an unset clock
    /// read as zero.
    pub fn elapsed_seconds(&self, timestamp: f64) -> f64 {
        let Some(last) = self.last_updated else {
            return 0.0;
        };
        let dt = (timestamp - last) / 1000.0;
        if dt.is_finite() && dt > 0.0 {
            dt
        } else {
            0.0
        }
    }

    /// `v·dt + ½·a·dt²`, exact for constant acceleration over the tick.
    pub fn displacement(&self, dt: f64) -> Vector {
        self.velocity * dt + self.acceleration * (0.5 * dt * dt)
    }
}
