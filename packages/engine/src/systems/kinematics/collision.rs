//! Contact probing and the corner tie-break table.
//!
//! A contact is a flush one: the edges coincide exactly. Edge contacts also
//! need the perpendicular extents to overlap strictly; corner contacts are
//! the diagonal-only case and are ambiguous, so the resolver decides from
//! the body's last whole-pixel move whether it reads as wall, floor or seam.

use crate::domain::{BoolPair, Bounds, Edges, Vector};

use super::shape::Part;

/// Which side (or corner) of a body meets an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touch {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Touch {
    /// Does `body` meet `block` on this side?
    #[inline]
    pub fn test(self, body: &Edges, block: &Edges) -> bool {
        match self {
            Touch::Top => {
                body.top == block.bottom && body.right > block.left && body.left < block.right
            }
            Touch::Bottom => {
                body.bottom == block.top && body.right > block.left && body.left < block.right
            }
            Touch::Left => {
                body.left == block.right && body.bottom > block.top && body.top < block.bottom
            }
            Touch::Right => {
                body.right == block.left && body.bottom > block.top && body.top < block.bottom
            }
            Touch::TopLeft => body.top == block.bottom && body.left == block.right,
            Touch::TopRight => body.top == block.bottom && body.right == block.left,
            Touch::BottomLeft => body.bottom == block.top && body.left == block.right,
            Touch::BottomRight => body.bottom == block.top && body.right == block.left,
        }
    }
}

/// Touch flags of a body against a whole obstacle set.
///
/// Corner flags are only raised when neither adjacent edge touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Contacts {
    /// Probe every part (placed at `anchor`) against every obstacle.
    pub fn probe<O: Bounds>(parts: &[Part], anchor: Vector, obstacles: &[O]) -> Self {
        let mut raw = Contacts::default();
        for part in parts {
            let e = part.edges_at(anchor);
            for obstacle in obstacles {
                let o = obstacle.edges();
                raw.top |= Touch::Top.test(&e, &o);
                raw.bottom |= Touch::Bottom.test(&e, &o);
                raw.left |= Touch::Left.test(&e, &o);
                raw.right |= Touch::Right.test(&e, &o);
                raw.top_left |= Touch::TopLeft.test(&e, &o);
                raw.top_right |= Touch::TopRight.test(&e, &o);
                raw.bottom_left |= Touch::BottomLeft.test(&e, &o);
                raw.bottom_right |= Touch::BottomRight.test(&e, &o);
            }
        }
        raw.masked()
    }

    /// Drop corner flags that an adjacent edge contact already explains.
    fn masked(self) -> Self {
        Self {
            bottom_right: !self.bottom && !self.right && self.bottom_right,
            bottom_left: !self.bottom && !self.left && self.bottom_left,
            top_right: !self.top && !self.right && self.top_right,
            top_left: !self.top && !self.left && self.top_left,
            ..self
        }
    }

    /// Which axes of `vector` are blocked, given the last whole-pixel move.
    ///
    /// Pure: same flags, vector and previous step always give the same answer.
    pub fn resolve(&self, vector: Vector, previous_step: Vector) -> BoolPair {
        let mut blocked = BoolPair::none();

        // walls
        if self.right && vector.x > 0.0 {
            blocked.x = true;
        } else if self.left && vector.x < 0.0 {
            blocked.x = true;
        }

        // floor / ceiling
        if self.bottom && vector.y > 0.0 {
            blocked.y = true;
        } else if self.top && vector.y < 0.0 {
            blocked.y = true;
        }

        // corners: at most one branch applies
        if self.bottom_right && vector.x > 0.0 {
            if self.top_right && previous_step.is_tall() {
                blocked.y = true; // falling into a one-pixel wall gap
            } else if self.bottom_left && previous_step.is_wide() {
                blocked.x = true; // walking over a one-pixel floor gap
            } else if vector.y > 0.0 {
                blocked.y = true; // landing on the block's corner
            } else {
                blocked.x = true;
            }
        } else if self.bottom_left && vector.x < 0.0 {
            if self.top_left && previous_step.is_tall() {
                blocked.y = true;
            } else if self.bottom_right && previous_step.is_wide() {
                blocked.x = true;
            } else if vector.y > 0.0 {
                blocked.y = true;
            } else {
                blocked.x = true;
            }
        } else if self.top_right && vector.x > 0.0 && vector.y < 0.0 {
            blocked.x = true; // grazing an underside corner counts as a wall
        } else if self.top_left && vector.x < 0.0 && vector.y < 0.0 {
            blocked.x = true;
        }

        blocked
    }
}

/// Probe and resolve in one go.
pub fn check_for_collisions<O: Bounds>(
    parts: &[Part],
    anchor: Vector,
    obstacles: &[O],
    vector: Vector,
    previous_step: Vector,
) -> BoolPair {
    Contacts::probe(parts, anchor, obstacles).resolve(vector, previous_step)
}
