//! Level - one player ticking against a field of static blocks
//!
//! `LevelCore` only orchestrates: integration and collision live in
//! `systems::kinematics`, intents in `systems::player`. Blocks are never
//! updated; they exist purely as obstacles.
//!
//! Helpers are split by concern:
//! - init/     - construction and perf toggles
//! - commands/ - intents and level editing
//! - step/     - one tick
//! - perf/     - timing and the per-tick snapshot

use crate::domain::{BodyError, Bounds, Edges, Vector};
use crate::systems::kinematics::{Block, StepReport};
use crate::systems::player::Player;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::Level;
pub use perf_stats::TickStats;

use perf_timer::PerfTimer;

/// The simulation level
#[derive(Clone, Debug)]
pub struct LevelCore {
    player: Player,
    blocks: Vec<Block>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    tick_stats: TickStats,
}

impl LevelCore {
    pub fn new(player: Player, blocks: Vec<Block>) -> Self {
        init::create_level_core(player, blocks)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_edges(&self) -> Edges {
        self.player.edges()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Bounding box of every block, or of the player in an empty level.
    pub fn bounds(&self) -> Edges {
        init::level_bounds(&self.player, &self.blocks)
    }

    pub fn width(&self) -> i32 {
        self.bounds().width()
    }

    pub fn height(&self) -> i32 {
        self.bounds().height()
    }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick snapshot (zeros when perf disabled)
    pub fn tick_stats(&self) -> TickStats {
        settings::tick_stats(self)
    }

    pub fn add_block(&mut self, position: Vector, size: Vector) -> Result<(), BodyError> {
        commands::add_block(self, position, size)
    }

    pub fn add_player_part(&mut self, position: Vector, size: Vector) -> Result<(), BodyError> {
        commands::add_player_part(self, position, size)
    }

    pub fn start_moving_left(&mut self) {
        commands::start_moving_left(self);
    }

    pub fn stop_moving_left(&mut self) {
        commands::stop_moving_left(self);
    }

    pub fn start_moving_right(&mut self) {
        commands::start_moving_right(self);
    }

    pub fn stop_moving_right(&mut self) {
        commands::stop_moving_right(self);
    }

    pub fn start_jumping(&mut self) {
        commands::start_jumping(self);
    }

    pub fn stop_jumping(&mut self) {
        commands::stop_jumping(self);
    }

    /// Advance the player to `timestamp` (milliseconds).
    pub fn update(&mut self, timestamp: f64) -> StepReport {
        step::update(self, timestamp)
    }

    /// Whether the driver should keep its animation loop running.
    pub fn needs_tick(&self) -> bool {
        self.player.needs_tick(&self.blocks)
    }

    /// Restart the tick clock, e.g. when resuming after a pause.
    pub fn reset_update_timer(&mut self, now: f64) {
        self.player.reset_update_timer(now);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
