//! CompositeBody - several rectangles moving as one
//!
//! Members are owned by value and only store an offset from the composite's
//! position; they never point back at the composite. Anything that needs a
//! member's absolute placement goes through the composite.

use crate::domain::{BodyError, BodySettings, BoolPair, Bounds, Edges, Vector};

use super::body::checked_size;
use super::collision::check_for_collisions;
use super::interpolate::{advance, interpolate_position, StepReport};
use super::motion::Motion;
use super::shape::{Part, Shape};

#[derive(Clone, Debug, PartialEq)]
pub struct CompositeBody {
    motion: Motion,
    members: Vec<Part>,
}

impl CompositeBody {
    /// Members are placed relative to `settings.position`.
    pub fn new(settings: &BodySettings, members: Vec<Part>) -> Result<Self, BodyError> {
        if members.is_empty() {
            return Err(BodyError::EmptyComposite);
        }
        for member in &members {
            checked_size(member.size)?;
        }
        log::debug!("composite body with {} members", members.len());
        Ok(Self {
            motion: Motion::new(settings.position, settings.velocity, settings.acceleration),
            members,
        })
    }

    /// Build from absolutely placed `(position, size)` rectangles. The
    /// composite sits at their top-left corner; `settings.position` is unused.
    pub fn from_parts<I>(rects: I, settings: &BodySettings) -> Result<Self, BodyError>
    where
        I: IntoIterator<Item = (Vector, Vector)>,
    {
        let rects: Vec<(Vector, Vector)> = rects.into_iter().collect();
        let origin = rects
            .iter()
            .map(|(position, _)| *position)
            .reduce(Vector::min)
            .ok_or(BodyError::EmptyComposite)?;
        let members = rects
            .into_iter()
            .map(|(position, size)| Part::new(position - origin, size))
            .collect();
        Self::new(&BodySettings { position: origin, ..settings.clone() }, members)
    }

    pub fn members(&self) -> &[Part] {
        &self.members
    }

    /// Absolute rounded position of member `index`.
    pub fn member_position(&self, index: usize) -> Option<Vector> {
        self.members
            .get(index)
            .map(|m| (self.motion.position() + m.offset).rounded())
    }

    pub fn member_edges(&self, index: usize) -> Option<Edges> {
        self.members.get(index).map(|m| m.edges_at(self.motion.position()))
    }

    /// Extent of the bounding box over all members.
    pub fn size(&self) -> Vector {
        self.bounding_edges().size()
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

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    pub fn reset_update_timer(&mut self, now: f64) {
        self.motion.reset_update_timer(now);
    }

    pub fn update<O: Bounds>(&mut self, timestamp: f64, obstacles: &[O]) -> StepReport {
        advance(&mut self.motion, &self.members, timestamp, obstacles)
    }

    pub fn interpolate_position<O: Bounds>(&mut self, displacement: Vector, obstacles: &[O]) -> StepReport {
        interpolate_position(&mut self.motion, &self.members, displacement, obstacles)
    }

    pub fn check_for_collisions<O: Bounds>(&self, obstacles: &[O], vector: Vector) -> BoolPair {
        check_for_collisions(
            &self.members,
            self.motion.position(),
            obstacles,
            vector,
            self.motion.previous_step(),
        )
    }
}

impl Shape for CompositeBody {
    fn parts(&self) -> &[Part] {
        &self.members
    }

    fn anchor(&self) -> Vector {
        self.motion.position()
    }
}

impl Bounds for CompositeBody {
    fn edges(&self) -> Edges {
        self.bounding_edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN: Vector = Vector::new(10.0, 10.0);

    fn still(position: Vector) -> BodySettings {
        BodySettings {
            position,
            velocity: Vector::zero(),
            acceleration: Vector::zero(),
            ..BodySettings::default()
        }
    }

    fn pair_at(position: Vector) -> CompositeBody {
        CompositeBody::new(
            &still(position),
            vec![Part::new(Vector::zero(), TEN), Part::new(Vector::new(10.0, 0.0), TEN)],
        )
        .unwrap()
    }

    #[test]
    fn empty_composite_is_rejected() {
        assert!(matches!(
            CompositeBody::new(&still(Vector::zero()), Vec::new()),
            Err(BodyError::EmptyComposite)
        ));
        let none: Vec<(Vector, Vector)> = Vec::new();
        assert!(CompositeBody::from_parts(none, &BodySettings::default()).is_err());
    }

    #[test]
    fn member_with_bad_size_is_rejected() {
        let err = CompositeBody::new(
            &still(Vector::zero()),
            vec![Part::new(Vector::zero(), TEN), Part::new(Vector::zero(), Vector::new(-1.0, 2.0))],
        )
        .unwrap_err();
        assert!(matches!(err, BodyError::InvalidSize { .. }));
    }

    #[test]
    fn bounding_box_aggregates_members() {
        let c = pair_at(Vector::new(30.0, 7.0));
        assert_eq!(c.left(), 30);
        assert_eq!(c.right(), 50);
        assert_eq!(c.top(), 7);
        assert_eq!(c.bottom(), 17);
        assert_eq!(c.size(), Vector::new(20.0, 10.0));
        assert_eq!(c.member_edges(1), Some(Edges::new(40, 7, 50, 17)));
        assert_eq!(c.member_position(1), Some(Vector::new(40.0, 7.0)));
        assert_eq!(c.member_edges(2), None);
    }

    #[test]
    fn from_parts_normalizes_offsets() {
        let c = CompositeBody::from_parts(
            [(Vector::new(110.0, 60.0), TEN), (Vector::new(100.0, 70.0), TEN)],
            &still(Vector::new(999.0, 999.0)),
        )
        .unwrap();
        assert_eq!(c.position(), Vector::new(100.0, 60.0));
        assert_eq!(c.members()[0].offset, Vector::new(10.0, 0.0));
        assert_eq!(c.members()[1].offset, Vector::new(0.0, 10.0));
        assert_eq!(c.edges(), Edges::new(100, 60, 120, 80));
    }

    #[test]
    fn touch_is_any_member_against_any_obstacle() {
        // L-shape: the lower member overhangs a ledge the upper one misses
        let c = CompositeBody::new(
            &still(Vector::zero()),
            vec![Part::new(Vector::zero(), TEN), Part::new(Vector::new(0.0, 10.0), TEN)],
        )
        .unwrap();
        let ledge = [Edges::new(10, 15, 30, 25)];
        assert!(c.is_right_touching(&ledge));
        assert!(!c.is_bottom_touching(&ledge));
        let floor = [Edges::new(-5, 20, 5, 30)];
        assert!(c.is_bottom_touching(&floor));
    }

    #[test]
    fn composite_falls_as_one_and_lands_on_lowest_member() {
        let settings = BodySettings {
            position: Vector::zero(),
            velocity: Vector::zero(),
            acceleration: Vector::new(0.0, 400.0),
            ..BodySettings::default()
        };
        let mut c = CompositeBody::new(
            &settings,
            vec![Part::new(Vector::zero(), TEN), Part::new(Vector::new(10.0, 5.0), TEN)],
        )
        .unwrap();
        let floor = [Edges::new(-100, 60, 100, 70)];
        c.reset_update_timer(0.0);
        let mut t = 0.0;
        for _ in 0..40 {
            t += 50.0;
            c.update(t, &floor);
        }
        assert_eq!(c.bottom(), 60);
        assert_eq!(c.position().y, 45.0);
        assert_eq!(c.velocity().y, 0.0);
        assert_eq!(c.member_edges(0), Some(Edges::new(0, 45, 10, 55)));
    }
}
