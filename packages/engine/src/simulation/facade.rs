use wasm_bindgen::prelude::*;

use crate::domain::{BodySettings, Vector};
use crate::systems::player::Player;

use super::perf_stats::TickStats;
use super::LevelCore;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Level {
    core: LevelCore,
}

#[wasm_bindgen]
impl Level {
    /// Create a level whose player is described by a JSON `BodySettings`
    /// document. Missing fields take the defaults; `"{}"` is valid.
    #[wasm_bindgen(constructor)]
    pub fn new(player_settings_json: &str) -> Result<Level, JsValue> {
        let settings = BodySettings::from_json(player_settings_json).map_err(to_js)?;
        let player = Player::new(&settings).map_err(to_js)?;
        Ok(Self {
            core: LevelCore::new(player, Vec::new()),
        })
    }

    pub fn add_block(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.core
            .add_block(Vector::new(x, y), Vector::new(width, height))
            .map_err(to_js)
    }

    /// Grow the player by one rectangle (absolute coordinates).
    pub fn add_player_part(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.core
            .add_player_part(Vector::new(x, y), Vector::new(width, height))
            .map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn block_count(&self) -> u32 { self.core.blocks().len() as u32 }

    // === PLAYER GEOMETRY ===

    #[wasm_bindgen(getter)]
    pub fn left(&self) -> i32 { self.core.player_edges().left }

    #[wasm_bindgen(getter)]
    pub fn right(&self) -> i32 { self.core.player_edges().right }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> i32 { self.core.player_edges().top }

    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> i32 { self.core.player_edges().bottom }

    #[wasm_bindgen(getter)]
    pub fn is_moving(&self) -> bool { self.core.player().is_moving() }

    #[wasm_bindgen(getter)]
    pub fn is_jumping(&self) -> bool { self.core.player().is_jumping() }

    // === INTENTS ===

    pub fn start_moving_left(&mut self) {
        self.core.start_moving_left();
    }

    pub fn stop_moving_left(&mut self) {
        self.core.stop_moving_left();
    }

    pub fn start_moving_right(&mut self) {
        self.core.start_moving_right();
    }

    pub fn stop_moving_right(&mut self) {
        self.core.stop_moving_right();
    }

    pub fn start_jumping(&mut self) {
        self.core.start_jumping();
    }

    pub fn stop_jumping(&mut self) {
        self.core.stop_jumping();
    }

    // === TICK ===

    /// Advance to `timestamp` (ms, e.g. from `requestAnimationFrame`).
    /// The first call after construction only starts the clock.
    pub fn update(&mut self, timestamp: f64) {
        self.core.update(timestamp);
    }

    pub fn needs_tick(&self) -> bool {
        self.core.needs_tick()
    }

    pub fn reset_update_timer(&mut self, now: f64) {
        self.core.reset_update_timer(now);
    }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick snapshot (zeros when perf disabled)
    pub fn get_tick_stats(&self) -> TickStats {
        self.core.tick_stats()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn bad_settings_surface_as_js_errors() {
        let err = Level::new("{\"size\": 3").err().expect("malformed json");
        assert!(err.as_string().is_some_and(|msg| msg.contains("settings")));

        let mut level = Level::new("{}").expect("defaults");
        let err = level.add_block(0.0, 0.0, -5.0, 5.0).err().expect("negative width");
        assert!(err.as_string().is_some());
    }

    #[wasm_bindgen_test]
    fn ticks_from_js_timestamps() {
        crate::init();
        let mut level = Level::new("{\"size\":{\"x\":10,\"y\":10}}").expect("valid settings");
        level.add_block(-50.0, 30.0, 100.0, 10.0).expect("valid block");
        level.reset_update_timer(1_000.0);
        let mut t = 1_000.0;
        for _ in 0..60 {
            t += 16.0;
            level.update(t);
        }
        assert_eq!(level.bottom(), 30);
        assert!(!level.needs_tick());
    }
}
