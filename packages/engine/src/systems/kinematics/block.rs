use crate::domain::{BodyError, BodySettings, Bounds, Edges, Vector};

use super::body::KinematicBody;
use super::shape::{Part, Shape};

/// Static obstacle: a body whose velocity and acceleration are pinned at
/// zero and whose `update` does nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    body: KinematicBody,
}

impl Block {
    pub fn new(position: Vector, size: Vector) -> Result<Self, BodyError> {
        let settings = BodySettings {
            position,
            size,
            velocity: Vector::zero(),
            acceleration: Vector::zero(),
            ..BodySettings::default()
        };
        Ok(Self { body: KinematicBody::new(&settings)? })
    }

    pub fn from_edges(edges: Edges) -> Result<Self, BodyError> {
        Self::new(edges.origin(), edges.size())
    }

    pub fn position(&self) -> Vector {
        self.body.position()
    }

    pub fn size(&self) -> Vector {
        self.body.size()
    }

    /// Blocks never move.
    pub fn update<O: Bounds>(&mut self, _timestamp: f64, _obstacles: &[O]) {}
}

impl Shape for Block {
    fn parts(&self) -> &[Part] {
        self.body.parts()
    }

    fn anchor(&self) -> Vector {
        self.body.anchor()
    }
}

impl Bounds for Block {
    fn edges(&self) -> Edges {
        self.body.edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_round_trips_its_edges() {
        let e = Edges::new(-20, 40, 80, 45);
        let block = Block::from_edges(e).unwrap();
        assert_eq!(block.edges(), e);
        assert_eq!(block.size(), Vector::new(100.0, 5.0));
    }

    #[test]
    fn update_is_a_no_op() {
        let mut block = Block::new(Vector::new(3.0, 4.0), Vector::new(10.0, 10.0)).unwrap();
        let others = [Edges::new(0, 0, 1, 1)];
        block.update(10_000.0, &others);
        assert_eq!(block.position(), Vector::new(3.0, 4.0));
    }

    #[test]
    fn zero_sized_block_is_rejected() {
        assert!(Block::from_edges(Edges::new(0, 0, 0, 10)).is_err());
    }
}
