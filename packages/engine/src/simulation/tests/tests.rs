use super::*;
use crate::domain::BodySettings;

fn small_player(x: f64, y: f64) -> Player {
    let settings = BodySettings {
        size: Vector::new(10.0, 10.0),
        position: Vector::new(x, y),
        ..BodySettings::default()
    };
    Player::new(&settings).unwrap()
}

fn floor_at(y: f64) -> Block {
    Block::new(Vector::new(-100.0, y), Vector::new(300.0, 10.0)).unwrap()
}

/// Tick every 16ms for `ms` milliseconds starting at `start`; returns the last timestamp.
fn run(level: &mut LevelCore, start: f64, ms: f64) -> f64 {
    let mut t = start;
    while t < start + ms {
        t += 16.0;
        level.update(t);
    }
    t
}

#[test]
fn bounds_cover_all_blocks() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(50.0)]);
    level
        .add_block(Vector::new(400.0, -20.0), Vector::new(10.0, 10.0))
        .unwrap();
    assert_eq!(level.bounds(), Edges::new(-100, -20, 410, 60));
    assert_eq!(level.width(), 510);
    assert_eq!(level.height(), 80);
}

#[test]
fn empty_level_is_bounded_by_the_player() {
    let level = LevelCore::new(small_player(5.0, 7.0), Vec::new());
    assert_eq!(level.bounds(), Edges::new(5, 7, 15, 17));
}

#[test]
fn bad_block_is_rejected_and_not_added() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), Vec::new());
    assert!(level.add_block(Vector::zero(), Vector::new(10.0, -1.0)).is_err());
    assert!(level.blocks().is_empty());
}

#[test]
fn player_falls_and_settles_on_the_floor() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(50.0)]);
    level.reset_update_timer(0.0);
    assert!(level.needs_tick());

    run(&mut level, 0.0, 1_000.0);

    assert_eq!(level.player_edges().bottom, 50);
    assert_eq!(level.player().velocity(), Vector::zero());
    assert!(!level.needs_tick());
    assert!(level.frame() > 0);
}

#[test]
fn blocks_never_move() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(50.0)]);
    level.reset_update_timer(0.0);
    run(&mut level, 0.0, 500.0);
    assert_eq!(level.blocks()[0].edges(), Edges::new(-100, 50, 200, 60));
}

#[test]
fn walking_into_a_wall_stops_flush() {
    let wall = Block::new(Vector::new(50.0, -50.0), Vector::new(10.0, 60.0)).unwrap();
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(10.0), wall]);
    level.reset_update_timer(0.0);

    level.start_moving_right();
    run(&mut level, 0.0, 1_000.0);

    assert_eq!(level.player_edges().right, 50);
    assert_eq!(level.player_edges().bottom, 10);
    // still pushing, so the driver keeps ticking
    assert!(level.needs_tick());

    level.stop_moving_right();
    assert!(!level.needs_tick());
}

#[test]
fn jump_through_the_level_api() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(10.0)]);
    level.reset_update_timer(0.0);

    level.start_jumping();
    assert!(level.player().velocity().y < 0.0);
    let t = run(&mut level, 0.0, 200.0);
    assert!(level.player_edges().bottom < 10);

    // released mid-air: the jump keeps its arc
    level.stop_jumping();
    assert!(level.player().velocity().y < 0.0);

    run(&mut level, t, 2_000.0);
    assert_eq!(level.player_edges().bottom, 10);
    assert!(!level.needs_tick());
}

#[test]
fn composite_player_lands_as_one() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(50.0)]);
    level
        .add_player_part(Vector::new(10.0, 5.0), Vector::new(10.0, 10.0))
        .unwrap();
    assert_eq!(level.player_edges(), Edges::new(0, 0, 20, 15));

    level.reset_update_timer(0.0);
    run(&mut level, 0.0, 1_000.0);
    assert_eq!(level.player_edges(), Edges::new(0, 35, 20, 50));
}

#[test]
fn tick_stats_only_when_enabled() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(10.0)]);
    level.reset_update_timer(0.0);
    level.update(16.0);
    assert_eq!(level.tick_stats(), TickStats::default());

    level.enable_perf_metrics(true);
    level.start_moving_right();
    level.update(116.0);
    let stats = level.tick_stats();
    assert_eq!(stats.frame(), 2);
    assert_eq!(stats.obstacle_count(), 1);
    assert_eq!(stats.steps(), 25);
    assert!(!stats.blocked_x());
    assert!(stats.step_ms() >= 0.0);

    level.enable_perf_metrics(false);
    assert_eq!(level.tick_stats(), TickStats::default());
}

#[test]
fn non_finite_timestamp_is_ignored() {
    let mut level = LevelCore::new(small_player(0.0, 0.0), vec![floor_at(50.0)]);
    level.reset_update_timer(0.0);
    level.update(f64::NAN);
    assert_eq!(level.player_edges(), Edges::new(0, 0, 10, 10));
    level.update(100.0);
    assert!(level.player_edges().top > 0);
}
