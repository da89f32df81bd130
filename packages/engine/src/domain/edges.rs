use super::vec2::{round_half_up, Vector};

/// Integer bounding edges of an axis-aligned rectangle (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edges {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Edges {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Edges of a rectangle at `position` with `size`, rounded to pixels.
    #[inline]
    pub fn from_rect(position: Vector, size: Vector) -> Self {
        Self {
            left: round_half_up(position.x) as i32,
            right: round_half_up(position.x + size.x) as i32,
            top: round_half_up(position.y) as i32,
            bottom: round_half_up(position.y + size.y) as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn origin(&self) -> Vector {
        Vector::new(self.left as f64, self.top as f64)
    }

    pub fn size(&self) -> Vector {
        Vector::new(self.width() as f64, self.height() as f64)
    }

    #[must_use]
    pub fn union(&self, other: &Edges) -> Self {
        Self {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Bounding box of all `edges`, `None` when empty.
    pub fn union_all<I: IntoIterator<Item = Edges>>(edges: I) -> Option<Self> {
        edges.into_iter().reduce(|acc, e| acc.union(&e))
    }
}

/// Anything that occupies an axis-aligned box the engine can collide with.
///
/// This is the whole obstacle-source interface: the integrator only ever
/// reads `edges()` from the obstacles it is handed.
pub trait Bounds {
    fn edges(&self) -> Edges;
}

impl Bounds for Edges {
    #[inline]
    fn edges(&self) -> Edges {
        *self
    }
}

impl<T: Bounds + ?Sized> Bounds for &T {
    #[inline]
    fn edges(&self) -> Edges {
        (**self).edges()
    }
}
