use crate::domain::{BodyError, Vector};
use crate::systems::kinematics::Block;

use super::LevelCore;

pub(super) fn add_block(level: &mut LevelCore, position: Vector, size: Vector) -> Result<(), BodyError> {
    let block = Block::new(position, size)?;
    level.blocks.push(block);
    Ok(())
}

pub(super) fn add_player_part(level: &mut LevelCore, position: Vector, size: Vector) -> Result<(), BodyError> {
    level.player.add_part(position, size)
}

pub(super) fn start_moving_left(level: &mut LevelCore) {
    level.player.start_moving_left();
}

pub(super) fn stop_moving_left(level: &mut LevelCore) {
    level.player.stop_moving_left();
}

pub(super) fn start_moving_right(level: &mut LevelCore) {
    level.player.start_moving_right();
}

pub(super) fn stop_moving_right(level: &mut LevelCore) {
    level.player.stop_moving_right();
}

// Jumping depends on ground contact, so these see the blocks.
pub(super) fn start_jumping(level: &mut LevelCore) {
    level.player.start_jumping(&level.blocks);
}

pub(super) fn stop_jumping(level: &mut LevelCore) {
    level.player.stop_jumping(&level.blocks);
}
