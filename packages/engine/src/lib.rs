//! Platformer Engine - pixel-stepped kinematics for a browser platformer
//!
//! Bodies move continuously under constant acceleration but are only ever
//! drawn and collided at whole pixels. Every tick the rounded displacement
//! is walked one pixel at a time against static obstacles, with corner
//! contacts broken by the body's last direction of travel.
//!
//! Architecture:
//! - domain/     - value types, settings, errors
//! - systems/    - kinematics and player intents
//! - simulation/ - level orchestration and the wasm facade

pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("platformer engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{round_half_up, BodyError, BodySettings, BoolPair, Bounds, Edges, Vector};
pub use simulation::{Level, LevelCore, TickStats};
pub use systems::kinematics::{Block, Body, CompositeBody, KinematicBody, Part, Shape, StepReport};
pub use systems::player::Player;
