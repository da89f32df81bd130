use wasm_bindgen::prelude::*;

use crate::systems::kinematics::StepReport;

/// Snapshot of the most recent tick. All zeros until perf metrics are
/// enabled and a tick has run.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(super) frame: u64,
    pub(super) step_ms: f64,
    pub(super) steps: u32,
    pub(super) blocked_x: bool,
    pub(super) blocked_y: bool,
    pub(super) obstacle_count: u32,
}

impl TickStats {
    pub(crate) fn record(frame: u64, step_ms: f64, report: &StepReport, obstacle_count: usize) -> Self {
        TickStats {
            frame,
            step_ms,
            steps: u32::try_from(report.steps).unwrap_or(u32::MAX),
            blocked_x: report.blocked.x,
            blocked_y: report.blocked.y,
            obstacle_count: u32::try_from(obstacle_count).unwrap_or(u32::MAX),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn blocked_x(&self) -> bool { self.blocked_x }
    #[wasm_bindgen(getter)]
    pub fn blocked_y(&self) -> bool { self.blocked_y }
    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> u32 { self.obstacle_count }
}
