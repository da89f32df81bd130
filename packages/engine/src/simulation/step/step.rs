use crate::systems::kinematics::StepReport;

use super::perf_stats::TickStats;
use super::{LevelCore, PerfTimer};

/// One tick: only the player moves, blocks are pure obstacles.
pub(super) fn update(level: &mut LevelCore, timestamp: f64) -> StepReport {
    let timer = level.perf_enabled.then(PerfTimer::start);

    let report = level.player.update(timestamp, &level.blocks);
    level.frame += 1;

    if let Some(timer) = timer {
        level.tick_stats = TickStats::record(level.frame, timer.elapsed_ms(), &report, level.blocks.len());
    }
    report
}
