use crate::domain::{Bounds, Edges, Vector};

use super::collision::{Contacts, Touch};

/// One rigid rectangle of a body, placed relative to the body's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub offset: Vector,
    pub size: Vector,
}

impl Part {
    pub fn new(offset: Vector, size: Vector) -> Self {
        Self { offset, size }
    }

    /// Pixel edges of this part when the owning body sits at `anchor`.
    #[inline]
    pub fn edges_at(&self, anchor: Vector) -> Edges {
        Edges::from_rect(anchor + self.offset, self.size)
    }
}

/// Does any part (placed at `anchor`) meet any obstacle on `touch`?
pub(crate) fn touching<O: Bounds>(parts: &[Part], anchor: Vector, obstacles: &[O], touch: Touch) -> bool {
    parts.iter().any(|part| {
        let e = part.edges_at(anchor);
        obstacles.iter().any(|o| touch.test(&e, &o.edges()))
    })
}

/// Geometry shared by simple, composite and static bodies: a position and
/// one or more parts hanging off it. Every touch predicate is derived from
/// these two, so a composite touches whatever any of its parts touches.
pub trait Shape {
    fn parts(&self) -> &[Part];

    /// Rounded position the parts are offset from.
    fn anchor(&self) -> Vector;

    fn part_edges(&self) -> impl Iterator<Item = Edges> + '_ {
        let anchor = self.anchor();
        self.parts().iter().map(move |p| p.edges_at(anchor))
    }

    /// Bounding box over all parts, recomputed on every call.
    fn bounding_edges(&self) -> Edges {
        Edges::union_all(self.part_edges())
            .unwrap_or_else(|| Edges::from_rect(self.anchor(), Vector::zero()))
    }

    fn left(&self) -> i32 {
        self.bounding_edges().left
    }

    fn right(&self) -> i32 {
        self.bounding_edges().right
    }

    fn top(&self) -> i32 {
        self.bounding_edges().top
    }

    fn bottom(&self) -> i32 {
        self.bounding_edges().bottom
    }

    fn width(&self) -> i32 {
        self.bounding_edges().width()
    }

    fn height(&self) -> i32 {
        self.bounding_edges().height()
    }

    fn contacts<O: Bounds>(&self, obstacles: &[O]) -> Contacts {
        Contacts::probe(self.parts(), self.anchor(), obstacles)
    }

    fn is_touching<O: Bounds>(&self, obstacles: &[O], touch: Touch) -> bool {
        touching(self.parts(), self.anchor(), obstacles, touch)
    }

    fn is_top_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::Top)
    }

    fn is_bottom_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::Bottom)
    }

    fn is_left_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::Left)
    }

    fn is_right_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::Right)
    }

    fn is_top_left_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::TopLeft)
    }

    fn is_top_right_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::TopRight)
    }

    fn is_bottom_left_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::BottomLeft)
    }

    fn is_bottom_right_touching<O: Bounds>(&self, obstacles: &[O]) -> bool {
        self.is_touching(obstacles, Touch::BottomRight)
    }
}
