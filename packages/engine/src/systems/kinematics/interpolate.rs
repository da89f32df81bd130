use crate::domain::{BoolPair, Bounds, Vector};

use super::collision::{check_for_collisions, Touch};
use super::motion::Motion;
use super::shape::{touching, Part};

/// Upper bound on whole-pixel steps in one tick. Far beyond any level;
/// it only guards against runaway displacements.
pub const MAX_STEPS: u64 = 1 << 20;

/// What one tick of integration did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Whole-pixel steps taken by the stepping loop.
    pub steps: u64,
    /// Axes that hit something at any point during the tick.
    pub blocked: BoolPair,
    /// Continuous displacement requested for the tick.
    pub displacement: Vector,
}

/// Run one tick: move by `v·dt + ½·a·dt²`, then integrate velocity.
///
/// Position is integrated first so velocity changes never affect the same
/// tick's displacement. A non-finite `timestamp` leaves the body untouched.
pub(crate) fn advance<O: Bounds>(
    motion: &mut Motion,
    parts: &[Part],
    timestamp: f64,
    obstacles: &[O],
) -> StepReport {
    if !timestamp.is_finite() {
        log::warn!("ignoring tick with non-finite timestamp {timestamp}");
        return StepReport::default();
    }

    let dt = motion.elapsed_seconds(timestamp);
    let displacement = motion.displacement(dt);
    let report = interpolate_position(motion, parts, displacement, obstacles);
    update_velocity(motion, parts, dt, obstacles);
    motion.last_updated = Some(timestamp);

    log::trace!(
        "tick dt={dt:.4}s steps={} blocked=({}, {}) pos=({}, {})",
        report.steps,
        report.blocked.x,
        report.blocked.y,
        motion.position.x,
        motion.position.y
    );
    report
}

fn update_velocity<O: Bounds>(motion: &mut Motion, parts: &[Part], dt: f64, obstacles: &[O]) {
    motion.velocity += motion.acceleration * dt;

    let anchor = motion.position;
    if motion.velocity.y > 0.0 && touching(parts, anchor, obstacles, Touch::Bottom) {
        motion.velocity.y = 0.0; // resting on the floor
    }
    if motion.velocity.y < 0.0 && touching(parts, anchor, obstacles, Touch::Top) {
        motion.velocity.y = 0.0; // pressed against the ceiling
    }
}

/// Move by `displacement` one whole pixel at a time (DDA style), so no
/// obstacle can be skipped, stopping each axis as soon as it is blocked.
///
/// The stepped vector is the difference of *rounded* positions, not the raw
/// displacement, so the loop always ends where rounding says it should.
/// Axes blocked during the tick drop their sub-pixel remainder so no
/// fractional pressure builds up against a wall.
pub(crate) fn interpolate_position<O: Bounds>(
    motion: &mut Motion,
    parts: &[Part],
    displacement: Vector,
    obstacles: &[O],
) -> StepReport {
    let mut report = StepReport { displacement, ..StepReport::default() };
    let start = motion.unrounded_position;
    let unrounded_final = start + displacement;
    if !unrounded_final.is_finite() {
        log::warn!("ignoring non-finite displacement ({}, {})", displacement.x, displacement.y);
        return report;
    }

    let rounded_final = unrounded_final.rounded();
    let rounded_vector = rounded_final - motion.position;
    let size = rounded_vector.width().max(rounded_vector.height());

    let mut blocked = check_for_collisions(
        parts,
        motion.position,
        obstacles,
        displacement,
        motion.previous_step,
    );
    let mut any = blocked;

    let mut truncated = false;
    if size > 0.0 {
        let mut steps = size as u64;
        if steps > MAX_STEPS {
            log::warn!("tick wants {steps} pixel steps, stopping after {MAX_STEPS}");
            steps = MAX_STEPS;
            truncated = true;
        }
        // Per-axis count of steps actually taken. Keeping the sum as
        // `rounded_vector * taken / size` makes a full run land exactly on
        // `rounded_final` instead of drifting by accumulated float error.
        let (mut taken_x, mut taken_y) = (0u64, 0u64);

        for _ in 0..steps {
            // Nothing left can change once both axes are stuck.
            if blocked.x && blocked.y {
                break;
            }
            if !blocked.x {
                taken_x += 1;
            }
            if !blocked.y {
                taken_y += 1;
            }
            motion.unrounded_position = Vector::new(
                start.x + rounded_vector.x * taken_x as f64 / size,
                start.y + rounded_vector.y * taken_y as f64 / size,
            );

            let next = motion.unrounded_position.rounded();
            let delta = next - motion.position;
            if !delta.is_zero() {
                motion.previous_step = delta;
            }
            motion.position = next;

            blocked = check_for_collisions(
                parts,
                motion.position,
                obstacles,
                displacement,
                motion.previous_step,
            );
            any |= blocked;
            report.steps += 1;
        }
    }

    if truncated {
        // Cut short: the remainder past where the body stopped is dropped.
        motion.unrounded_position = motion.position;
        report.blocked = any;
        return report;
    }

    motion.unrounded_position = unrounded_final;
    if any.x {
        motion.unrounded_position.x = motion.position.x;
    }
    if any.y {
        motion.unrounded_position.y = motion.position.y;
    }

    report.blocked = any;
    report
}
