use crate::domain::{Bounds, Edges, Vector};

use super::block::Block;
use super::body::KinematicBody;
use super::composite::CompositeBody;
use super::interpolate::StepReport;
use super::motion::Motion;
use super::shape::{Part, Shape};

/// The closed set of body kinds the engine knows how to tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Simple(KinematicBody),
    Composite(CompositeBody),
    Static(Block),
}

impl Body {
    pub fn update<O: Bounds>(&mut self, timestamp: f64, obstacles: &[O]) -> StepReport {
        match self {
            Body::Simple(b) => b.update(timestamp, obstacles),
            Body::Composite(c) => c.update(timestamp, obstacles),
            Body::Static(b) => {
                b.update(timestamp, obstacles);
                StepReport::default()
            }
        }
    }

    /// Integration state; `None` for static bodies.
    pub fn motion(&self) -> Option<&Motion> {
        match self {
            Body::Simple(b) => Some(b.motion()),
            Body::Composite(c) => Some(c.motion()),
            Body::Static(_) => None,
        }
    }

    pub fn motion_mut(&mut self) -> Option<&mut Motion> {
        match self {
            Body::Simple(b) => Some(b.motion_mut()),
            Body::Composite(c) => Some(c.motion_mut()),
            Body::Static(_) => None,
        }
    }

    pub fn velocity(&self) -> Vector {
        self.motion().map(|m| m.velocity).unwrap_or_default()
    }

    pub fn position(&self) -> Vector {
        self.anchor()
    }

    pub fn size(&self) -> Vector {
        self.bounding_edges().size()
    }

    pub fn reset_update_timer(&mut self, now: f64) {
        if let Some(motion) = self.motion_mut() {
            motion.reset_update_timer(now);
        }
    }
}

impl Shape for Body {
    fn parts(&self) -> &[Part] {
        match self {
            Body::Simple(b) => b.parts(),
            Body::Composite(c) => c.parts(),
            Body::Static(b) => b.parts(),
        }
    }

    fn anchor(&self) -> Vector {
        match self {
            Body::Simple(b) => b.anchor(),
            Body::Composite(c) => c.anchor(),
            Body::Static(b) => b.anchor(),
        }
    }
}

impl Bounds for Body {
    fn edges(&self) -> Edges {
        self.bounding_edges()
    }
}

impl From<KinematicBody> for Body {
    fn from(body: KinematicBody) -> Self {
        Body::Simple(body)
    }
}

impl From<CompositeBody> for Body {
    fn from(body: CompositeBody) -> Self {
        Body::Composite(body)
    }
}

impl From<Block> for Body {
    fn from(block: Block) -> Self {
        Body::Static(block)
    }
}
