//! Kinematics - pixel-stepped motion of axis-aligned bodies
//!
//! Bodies integrate continuous motion under constant acceleration, but only
//! ever occupy whole pixels. Each tick the rounded displacement is walked
//! one pixel at a time so nothing is tunneled through, and each axis stops
//! the moment it meets an obstacle flush.
//!
//! - `motion`      - integration state owned by each moving body
//! - `shape`       - parts and the touch predicates derived from them
//! - `collision`   - contact flags and the corner tie-break table
//! - `interpolate` - the tick contract and the stepping loop
//! - `body` / `composite` / `block` - the three body kinds, unified by `kind::Body`

mod block;
mod body;
mod collision;
mod composite;
mod interpolate;
mod kind;
mod motion;
mod shape;

pub use block::Block;
pub use body::KinematicBody;
pub use collision::{check_for_collisions, Contacts, Touch};
pub use composite::CompositeBody;
pub use interpolate::{StepReport, MAX_STEPS};
pub use kind::Body;
pub use motion::Motion;
pub use shape::{Part, Shape};
