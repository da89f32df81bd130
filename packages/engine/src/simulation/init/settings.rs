use super::perf_stats::TickStats;
use super::LevelCore;

pub(super) fn enable_perf_metrics(level: &mut LevelCore, enabled: bool) {
    level.perf_enabled = enabled;
    if !enabled {
        level.tick_stats.reset();
    }
}

pub(super) fn tick_stats(level: &LevelCore) -> TickStats {
    level.tick_stats.clone()
}
