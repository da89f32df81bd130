//! Player - movement intents on top of a body
//!
//! Intents set velocity directly. Held intents are re-applied at the start
//! of every tick, so a jump key held through a landing jumps again.

use crate::domain::{BodyError, BodySettings, Bounds, Edges, Vector};
use crate::systems::kinematics::{Body, CompositeBody, KinematicBody, Part, Shape, StepReport};

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    body: Body,
    walking_speed: f64,
    jumping_speed: f64,
    is_moving_left: bool,
    is_moving_right: bool,
    is_jumping: bool,
}

impl Player {
    pub fn new(settings: &BodySettings) -> Result<Self, BodyError> {
        let body = KinematicBody::new(settings)?;
        Ok(Self::with_body(body.into(), settings))
    }

    /// Player made of several absolutely placed rectangles.
    pub fn composite<I>(rects: I, settings: &BodySettings) -> Result<Self, BodyError>
    where
        I: IntoIterator<Item = (Vector, Vector)>,
    {
        let body = CompositeBody::from_parts(rects, settings)?;
        Ok(Self::with_body(body.into(), settings))
    }

    pub fn with_body(body: Body, settings: &BodySettings) -> Self {
        Self {
            body,
            walking_speed: settings.walking_speed,
            jumping_speed: settings.jumping_speed,
            is_moving_left: false,
            is_moving_right: false,
            is_jumping: false,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn walking_speed(&self) -> f64 {
        self.walking_speed
    }

    pub fn jumping_speed(&self) -> f64 {
        self.jumping_speed
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving_left || self.is_moving_right
    }

    pub fn is_moving_left(&self) -> bool {
        self.is_moving_left
    }

    pub fn is_moving_right(&self) -> bool {
        self.is_moving_right
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn velocity(&self) -> Vector {
        self.body.velocity()
    }

    fn set_velocity_x(&mut self, vx: f64) {
        if let Some(motion) = self.body.motion_mut() {
            motion.velocity = motion.velocity.with_x(vx);
        }
    }

    fn set_velocity_y(&mut self, vy: f64) {
        if let Some(motion) = self.body.motion_mut() {
            motion.velocity = motion.velocity.with_y(vy);
        }
    }

    pub fn start_moving_left(&mut self) {
        self.set_velocity_x(-self.walking_speed);
        self.is_moving_left = true;
    }

    pub fn start_moving_right(&mut self) {
        self.set_velocity_x(self.walking_speed);
        self.is_moving_right = true;
    }

    /// Falls back to walking right if that key is still held.
    pub fn stop_moving_left(&mut self) {
        let vx = if self.is_moving_right { self.walking_speed } else { 0.0 };
        self.set_velocity_x(vx);
        self.is_moving_left = false;
    }

    pub fn stop_moving_right(&mut self) {
        let vx = if self.is_moving_left { -self.walking_speed } else { 0.0 };
        self.set_velocity_x(vx);
        self.is_moving_right = false;
    }

    /// Takes off only when resting on something with no vertical velocity.
    pub fn start_jumping<O: Bounds>(&mut self, obstacles: &[O]) {
        self.is_jumping = true;
        if self.body.is_bottom_touching(obstacles) && self.body.velocity().y == 0.0 {
            self.set_velocity_y(-self.jumping_speed);
        }
    }

    pub fn stop_jumping<O: Bounds>(&mut self, obstacles: &[O]) {
        self.is_jumping = false;
        if self.body.is_bottom_touching(obstacles) {
            self.set_velocity_y(0.0);
        }
    }

    pub fn reset_update_timer(&mut self, now: f64) {
        self.body.reset_update_timer(now);
    }

    /// Attach another rectangle at an absolute position, turning the body
    /// into a composite. Velocity, acceleration and the tick clock carry over.
    pub fn add_part(&mut self, position: Vector, size: Vector) -> Result<(), BodyError> {
        let anchor = self.body.anchor();
        let mut rects: Vec<(Vector, Vector)> = self
            .body
            .parts()
            .iter()
            .map(|part| (anchor + part.offset, part.size))
            .collect();
        rects.push((position, size));

        let previous = self.body.motion().cloned();
        let settings = BodySettings {
            velocity: previous.as_ref().map(|m| m.velocity).unwrap_or_default(),
            acceleration: previous.as_ref().map(|m| m.acceleration).unwrap_or_default(),
            ..BodySettings::default()
        };
        let mut composite = CompositeBody::from_parts(rects, &settings)?;
        if let Some(previous) = previous {
            let motion = composite.motion_mut();
            motion.last_updated = previous.last_updated;
            motion.previous_step = previous.previous_step;
        }
        self.body = composite.into();
        Ok(())
    }

    /// Re-apply held intents, then tick the body.
    pub fn update<O: Bounds>(&mut self, timestamp: f64, obstacles: &[O]) -> StepReport {
        if self.is_jumping {
            self.start_jumping(obstacles);
        }
        if self.is_moving_left && !self.is_moving_right {
            self.start_moving_left();
        }
        if self.is_moving_right && !self.is_moving_left {
            self.start_moving_right();
        }
        self.body.update(timestamp, obstacles)
    }

    /// Whether the driver should schedule another tick. A grounded, still
    /// player with no held jump can be left alone until an intent changes.
    pub fn needs_tick<O: Bounds>(&self, obstacles: &[O]) -> bool {
        let Some(motion) = self.body.motion() else {
            return false;
        };
        motion.velocity.x != 0.0
            || motion.velocity.y != 0.0
            || self.is_jumping
            || !self.body.is_bottom_touching(obstacles)
    }
}

impl Shape for Player {
    fn parts(&self) -> &[Part] {
        self.body.parts()
    }

    fn anchor(&self) -> Vector {
        self.body.anchor()
    }
}

impl Bounds for Player {
    fn edges(&self) -> Edges {
        self.body.edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::kinematics::Block;

    fn player_on_floor() -> (Player, Vec<Block>) {
        let settings = BodySettings {
            size: Vector::new(10.0, 10.0),
            position: Vector::new(0.0, 0.0),
            ..BodySettings::default()
        };
        let floor = vec![Block::new(Vector::new(-200.0, 10.0), Vector::new(400.0, 10.0)).unwrap()];
        (Player::new(&settings).unwrap(), floor)
    }

    #[test]
    fn opposite_keys_fall_back_to_the_held_one() {
        let (mut p, _) = player_on_floor();
        p.start_moving_left();
        p.start_moving_right();
        assert_eq!(p.velocity().x, p.walking_speed());
        p.stop_moving_right();
        assert_eq!(p.velocity().x, -p.walking_speed());
        assert!(p.is_moving());
        p.stop_moving_left();
        assert_eq!(p.velocity().x, 0.0);
        assert!(!p.is_moving());
    }

    #[test]
    fn jump_needs_ground() {
        let (mut p, floor) = player_on_floor();
        p.start_jumping(&floor);
        assert!(p.is_jumping());
        assert_eq!(p.velocity().y, -p.jumping_speed());

        // nothing underneath: the intent is held but there is no takeoff
        let none: [Edges; 0] = [];
        let (mut q, _) = player_on_floor();
        q.start_jumping(&none);
        assert!(q.is_jumping());
        assert_eq!(q.velocity().y, 0.0);
    }

    #[test]
    fn stop_jumping_on_ground_cancels_takeoff() {
        let (mut p, floor) = player_on_floor();
        p.start_jumping(&floor);
        p.stop_jumping(&floor);
        assert!(!p.is_jumping());
        assert_eq!(p.velocity().y, 0.0);
    }

    #[test]
    fn jump_leaves_the_floor_and_lands_again() {
        let (mut p, floor) = player_on_floor();
        p.reset_update_timer(0.0);
        p.start_jumping(&floor);
        p.stop_jumping(&[] as &[Edges]);
        assert_eq!(p.velocity().y, -p.jumping_speed());

        let mut t = 0.0;
        let mut peak = 0;
        for _ in 0..200 {
            t += 16.0;
            p.update(t, &floor);
            peak = peak.min(p.top());
        }
        assert!(peak < -100);
        assert_eq!(p.bottom(), 10);
        assert_eq!(p.velocity().y, 0.0);
        assert!(!p.needs_tick(&floor));
    }

    #[test]
    fn held_walk_keeps_needing_ticks() {
        let (mut p, floor) = player_on_floor();
        assert!(!p.needs_tick(&floor));
        p.start_moving_right();
        assert!(p.needs_tick(&floor));
        p.reset_update_timer(0.0);
        p.update(100.0, &floor);
        assert_eq!(p.left(), 25);
        p.stop_moving_right();
        assert!(!p.needs_tick(&floor));
    }

    #[test]
    fn composite_player_from_parts() {
        let settings = BodySettings::default();
        let p = Player::composite(
            [(Vector::new(0.0, 0.0), Vector::new(10.0, 10.0)), (Vector::new(10.0, 0.0), Vector::new(10.0, 10.0))],
            &settings,
        )
        .unwrap();
        assert_eq!(p.edges(), Edges::new(0, 0, 20, 10));
        assert!(matches!(p.body(), Body::Composite(_)));
    }

    #[test]
    fn add_part_grows_a_composite_and_keeps_velocity() {
        let (mut p, _) = player_on_floor();
        p.start_moving_right();
        p.add_part(Vector::new(-10.0, 0.0), Vector::new(10.0, 10.0)).unwrap();
        assert!(matches!(p.body(), Body::Composite(_)));
        assert_eq!(p.edges(), Edges::new(-10, 0, 10, 10));
        assert_eq!(p.velocity().x, p.walking_speed());
        assert_eq!(p.parts().len(), 2);

        assert!(p.add_part(Vector::zero(), Vector::new(0.0, 3.0)).is_err());
        assert_eq!(p.parts().len(), 2);
    }
}
