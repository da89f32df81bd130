use crate::domain::{Bounds, Edges};
use crate::systems::kinematics::Block;
use crate::systems::player::Player;

use super::perf_stats::TickStats;
use super::LevelCore;

pub(super) fn create_level_core(player: Player, blocks: Vec<Block>) -> LevelCore {
    log::debug!(
        "level with {} blocks, player at {:?}",
        blocks.len(),
        player.edges()
    );
    LevelCore {
        player,
        blocks,
        frame: 0,
        perf_enabled: false,
        tick_stats: TickStats::default(),
    }
}

pub(super) fn level_bounds(player: &Player, blocks: &[Block]) -> Edges {
    Edges::union_all(blocks.iter().map(|block| block.edges())).unwrap_or_else(|| player.edges())
}
