use serde::{Deserialize, Serialize};

/// Nearest integer with halves rounded toward positive infinity.
///
/// Unlike `f64::round` this commutes with integer translation, which the
/// pixel stepper relies on: `round_half_up(x + n) == round_half_up(x) + n`.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// 2D vector for positions, sizes, velocities and per-tick displacements.
///
/// Values are in pixels (or pixels per second / per second squared).
/// Rounding everywhere in the engine goes through [`round_half_up`] so
/// the stepping loop and the rounded position never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x.abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y.abs()
    }

    /// Horizontal extent dominates (ties count as wide).
    #[inline]
    pub fn is_wide(&self) -> bool {
        self.width() >= self.height()
    }

    #[inline]
    pub fn is_tall(&self) -> bool {
        self.height() > self.width()
    }

    /// Signed component along the dominant axis.
    pub fn bigger_dimension(&self) -> f64 {
        if self.width() > self.height() {
            self.x
        } else {
            self.y
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise nearest integer, see [`round_half_up`].
    #[inline]
    pub fn rounded(&self) -> Self {
        Self { x: round_half_up(self.x), y: round_half_up(self.y) }
    }

    pub fn with_x(&self, x: f64) -> Self {
        Self { x, y: self.y }
    }

    pub fn with_y(&self, y: f64) -> Self {
        Self { x: self.x, y }
    }

    pub fn min(a: Vector, b: Vector) -> Self {
        Self { x: a.x.min(b.x), y: a.y.min(b.y) }
    }

    pub fn max(a: Vector, b: Vector) -> Self {
        Self { x: a.x.max(b.x), y: a.y.max(b.y) }
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        debug_assert!(rhs != 0.0, "Vector divided by zero");
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}
