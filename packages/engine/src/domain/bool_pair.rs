/// Per-axis flags, e.g. "is motion along x / y blocked this tick".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoolPair {
    pub x: bool,
    pub y: bool,
}

impl BoolPair {
    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    pub const fn none() -> Self {
        Self { x: false, y: false }
    }

    #[inline]
    pub fn or(self, other: BoolPair) -> Self {
        Self { x: self.x || other.x, y: self.y || other.y }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl std::ops::BitOr for BoolPair {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl std::ops::BitOrAssign for BoolPair {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.or(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_is_sticky() {
        let mut acc = BoolPair::none();
        acc |= BoolPair::new(true, false);
        acc |= BoolPair::new(false, false);
        assert_eq!(acc, BoolPair::new(true, false));
        acc |= BoolPair::new(false, true);
        assert!(acc.x && acc.y);
    }
}
