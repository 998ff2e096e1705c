//! Per-tick game logic: pole scrolling and recycling, bird motion, scoring,
//! and the crash test.

use super::types::{FlappyGame, GamePhase, Rect};
use crate::core::constants::{BIRD_STEP, POLE_GAP_OFFSET_RANGE, SPEED_INCREMENT};
use log::debug;
use rand::Rng;

/// Input actions for Flappy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap control pressed.
    FlapStart,
    /// Flap control released.
    FlapEnd,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The pole pair wrapped around with a new gap.
    pub recycled: bool,
    /// The bird cleared the current pole pair.
    pub scored: bool,
    /// The bird hit a pole or a bound; the run is over.
    pub crashed: bool,
}

/// Axis-aligned overlap test. Boxes that only share an edge do not collide.
pub fn check_collision(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Process player input. Ignored unless a run is in progress.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    if !game.is_playing() {
        return;
    }

    match input {
        FlappyInput::FlapStart => game.flapping = true,
        FlappyInput::FlapEnd => game.flapping = false,
    }
}

/// Scroll the poles by the current speed, recycling them once they leave the
/// play area. Returns true if a recycle happened.
pub fn advance_obstacles<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> bool {
    game.poles.offset += game.speed;
    if game.poles.offset <= game.area.width {
        return false;
    }

    game.poles.offset = 0.0;
    let gap_offset = rng.gen_range(0..POLE_GAP_OFFSET_RANGE);
    game.poles.set_gap_offset(gap_offset);
    game.speed += SPEED_INCREMENT;
    game.recycles += 1;
    game.score_updated = false;

    debug!(
        "Poles recycled: gap offset {}, speed now {}",
        gap_offset, game.speed
    );
    true
}

/// Move the bird one step: up while flapping, otherwise down until it rests on the floor.
pub fn advance_bird(game: &mut FlappyGame) {
    let floor = game.floor();
    if game.flapping {
        game.bird.top -= BIRD_STEP;
    } else if game.bird.top < floor {
        game.bird.top = (game.bird.top + BIRD_STEP).min(floor);
    }
}

/// Count the current pole pair once the bird is fully past it.
pub fn update_score(game: &mut FlappyGame) -> bool {
    if game.score_updated {
        return false;
    }
    let pole_right = game.poles.left(&game.area) + game.poles.width;
    if pole_right < game.bird.left {
        game.score += 1;
        game.score_updated = true;
        return true;
    }
    false
}

/// Crash test: the bird overlaps a pole, sat on a bound when the tick began,
/// or has just flown past the ceiling.
///
/// `top_before` is the bird's position before this tick's movement, so a bird
/// that lands exactly on the ceiling or floor ends the run on the following
/// tick. Falling is clamped to the floor, but a start height off the step grid
/// can carry a flap past the ceiling, which ends the run on that tick.
pub fn is_crashed(game: &FlappyGame, top_before: f64) -> bool {
    let bird = game.bird.bounds();
    let [upper, lower] = game.poles.bounds(&game.area);
    check_collision(&bird, &upper)
        || check_collision(&bird, &lower)
        || top_before <= 0.0
        || top_before >= game.floor()
        || game.bird.top < 0.0
}

/// End the run. No further ticks mutate the state until the next reset.
pub fn game_over(game: &mut FlappyGame) {
    game.phase = GamePhase::GameOver;
    game.flapping = false;
}

/// Reinitialize every field for a fresh run and mark it as playing.
pub fn reset(game: &mut FlappyGame) {
    *game = FlappyGame {
        phase: GamePhase::Playing,
        ..FlappyGame::new(game.area)
    };
}

/// Process one game tick: poles, bird, score, crash test.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> TickResult {
    if !game.is_playing() {
        return TickResult::default();
    }

    game.tick_count += 1;

    let recycled = advance_obstacles(game, rng);

    let top_before = game.bird.top;
    advance_bird(game);

    let scored = update_score(game);

    let crashed = is_crashed(game, top_before);
    if crashed {
        game_over(game);
    }

    TickResult {
        recycled,
        scored,
        crashed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{INITIAL_SPEED, POLE_COMBINED_HEIGHT};
    use crate::game::types::PlayArea;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn playing_game() -> FlappyGame {
        let mut game = FlappyGame::new(PlayArea::new(400.0, 400.0));
        reset(&mut game);
        game
    }

    #[test]
    fn test_reset_initial_values() {
        let mut game = playing_game();
        game.speed = 4.5;
        game.score = 9;
        game.score_updated = true;
        game.flapping = true;
        game.bird.top = 12.0;
        game.poles.offset = 77.0;
        game.poles.set_gap_offset(40);
        game.phase = GamePhase::GameOver;

        reset(&mut game);

        assert_eq!(game.speed, INITIAL_SPEED);
        assert_eq!(game.score, 0);
        assert!(!game.score_updated);
        assert!(!game.flapping);
        assert!(game.is_playing());
        assert_eq!(game.bird.top, 80.0);
        assert_eq!(game.poles.offset, 0.0);
        assert_eq!(game.poles.upper, 100.0);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_collision_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(check_collision(&a, &b));
        assert!(check_collision(&b, &a));
    }

    #[test]
    fn test_collision_shared_edge_is_not_a_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!check_collision(&a, &right));
        assert!(!check_collision(&a, &below));
    }

    #[test]
    fn test_collision_needs_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let same_column = Rect::new(2.0, 50.0, 4.0, 4.0);
        let same_row = Rect::new(50.0, 2.0, 4.0, 4.0);
        assert!(!check_collision(&a, &same_column));
        assert!(!check_collision(&a, &same_row));
    }

    #[test]
    fn test_collision_contained_box() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(check_collision(&outer, &inner));
    }

    #[test]
    fn test_obstacles_scroll_by_speed() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        assert!(!advance_obstacles(&mut game, &mut rng));
        assert_eq!(game.poles.offset, 2.0);
        assert!(!advance_obstacles(&mut game, &mut rng));
        assert_eq!(game.poles.offset, 4.0);
    }

    #[test]
    fn test_obstacles_recycle_past_width() {
        let mut game = playing_game();
        let mut rng = create_test_rng();

        // 200 steps of 2 land exactly on the width, which is still inside.
        for _ in 0..200 {
            assert!(!advance_obstacles(&mut game, &mut rng));
        }
        assert_eq!(game.poles.offset, 400.0);
        assert_eq!(game.speed, 2.0);

        game.score_updated = true;
        assert!(advance_obstacles(&mut game, &mut rng));
        assert_eq!(game.poles.offset, 0.0);
        assert_eq!(game.speed, 2.25);
        assert_eq!(game.poles.upper + game.poles.lower, POLE_COMBINED_HEIGHT);
        assert!(game.poles.upper >= 100.0 && game.poles.upper < 200.0);
        assert!(!game.score_updated);
        assert_eq!(game.recycles, 1);
    }

    #[test]
    fn test_recycled_heights_always_sum_to_combined() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        for _ in 0..50 {
            game.poles.offset = game.area.width;
            assert!(advance_obstacles(&mut game, &mut rng));
            assert_eq!(game.poles.upper + game.poles.lower, POLE_COMBINED_HEIGHT);
            assert!(game.poles.lower > 0.0);
        }
    }

    #[test]
    fn test_speed_never_decreases() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        let mut last = game.speed;
        for _ in 0..5000 {
            advance_obstacles(&mut game, &mut rng);
            assert!(game.speed >= last);
            assert!(game.poles.offset >= 0.0 && game.poles.offset <= game.area.width);
            last = game.speed;
        }
        assert!(game.speed > INITIAL_SPEED);
    }

    #[test]
    fn test_flap_moves_bird_up() {
        let mut game = playing_game();
        game.flapping = true;
        let before = game.bird.top;
        advance_bird(&mut game);
        assert_eq!(game.bird.top, before - 2.0);
    }

    #[test]
    fn test_bird_falls_when_not_flapping() {
        let mut game = playing_game();
        let before = game.bird.top;
        advance_bird(&mut game);
        assert_eq!(game.bird.top, before + 2.0);
    }

    #[test]
    fn test_bird_rests_on_floor() {
        let mut game = playing_game();
        game.bird.top = game.floor();
        advance_bird(&mut game);
        assert_eq!(game.bird.top, game.floor());

        game.bird.top = game.floor() - 1.0;
        advance_bird(&mut game);
        assert_eq!(game.bird.top, game.floor());
    }

    #[test]
    fn test_ceiling_is_not_clamped() {
        let mut game = playing_game();
        game.flapping = true;
        game.bird.top = 1.0;
        advance_bird(&mut game);
        assert_eq!(game.bird.top, -1.0);
    }

    #[test]
    fn test_input_toggles_flapping() {
        let mut game = playing_game();
        process_input(&mut game, FlappyInput::FlapStart);
        assert!(game.flapping);
        process_input(&mut game, FlappyInput::FlapEnd);
        assert!(!game.flapping);
    }

    #[test]
    fn test_input_ignored_when_not_playing() {
        let mut game = FlappyGame::new(PlayArea::default());
        process_input(&mut game, FlappyInput::FlapStart);
        assert!(!game.flapping);

        let mut game = playing_game();
        game_over(&mut game);
        process_input(&mut game, FlappyInput::FlapStart);
        assert!(!game.flapping);
    }

    #[test]
    fn test_reaching_ceiling_ends_game_next_tick() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.flapping = true;
        game.bird.top = 2.0;

        let result = process_tick(&mut game, &mut rng);
        assert!(!result.crashed);
        assert_eq!(game.bird.top, 0.0);
        assert!(game.is_playing());

        let result = process_tick(&mut game, &mut rng);
        assert!(result.crashed);
        assert_eq!(game.phase, GamePhase::GameOver);
        assert!(!game.flapping);
    }

    #[test]
    fn test_flap_past_ceiling_ends_game_same_tick() {
        // 405 high starts the bird at 81, off the 2-unit step grid.
        let mut game = FlappyGame::new(PlayArea::new(400.0, 405.0));
        reset(&mut game);
        let mut rng = create_test_rng();
        assert_eq!(game.bird.top, 81.0);
        game.flapping = true;
        game.bird.top = 1.0;

        let result = process_tick(&mut game, &mut rng);
        assert!(result.crashed);
        assert_eq!(game.bird.top, -1.0);
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_smallest_area_clears_opening_pole() {
        // 250x230: the bird starts at 46, inside the opening upper pole's
        // height band, and falls below it before the pole reaches its column.
        let mut game = FlappyGame::new(PlayArea::new(250.0, 230.0));
        reset(&mut game);
        let mut rng = create_test_rng();
        for _ in 0..40 {
            let result = process_tick(&mut game, &mut rng);
            assert!(!result.crashed, "crashed at tick {}", game.tick_count);
        }
        assert_eq!(game.bird.top, 126.0);
        assert!(game.poles.left(&game.area) > game.bird.left + game.bird.width);
    }

    #[test]
    fn test_reaching_floor_ends_game_next_tick() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game.bird.top = game.floor() - 2.0;

        let result = process_tick(&mut game, &mut rng);
        assert!(!result.crashed);
        assert_eq!(game.bird.top, game.floor());

        let result = process_tick(&mut game, &mut rng);
        assert!(result.crashed);
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_pole_hit_ends_game() {
        let mut game = playing_game();
        // After this tick's scroll the pole's left edge sits just inside the bird column.
        game.poles.offset = 250.0 - game.speed + 0.5;
        game.bird.top = 40.0;
        let mut rng = create_test_rng();

        let result = process_tick(&mut game, &mut rng);
        assert!(result.crashed);
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_bird_in_gap_survives() {
        let mut game = playing_game();
        game.poles.offset = 300.0;
        // Gap spans 100..300; bird is 30 tall.
        game.bird.top = 150.0;
        assert!(!is_crashed(&game, game.bird.top));
    }

    #[test]
    fn test_bird_touching_pole_edge_survives() {
        let mut game = playing_game();
        game.poles.offset = 300.0;
        game.bird.top = game.poles.upper;
        assert!(!is_crashed(&game, game.bird.top));
        game.bird.top = game.poles.upper - 0.5;
        assert!(is_crashed(&game, game.bird.top));
    }

    #[test]
    fn test_score_latches_per_pass() {
        let mut game = playing_game();
        // Pole right edge at 400 - 350 = 50, left of the bird at 60.
        game.poles.offset = 350.0;
        assert!(update_score(&mut game));
        assert_eq!(game.score, 1);
        assert!(game.score_updated);

        game.poles.offset = 360.0;
        assert!(!update_score(&mut game));
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_no_score_before_pass() {
        let mut game = playing_game();
        game.poles.offset = 300.0;
        assert!(!update_score(&mut game));
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_no_tick_when_not_playing() {
        let mut game = FlappyGame::new(PlayArea::default());
        let mut rng = create_test_rng();
        let before = game.bird.top;
        let result = process_tick(&mut game, &mut rng);
        assert_eq!(result, TickResult::default());
        assert_eq!(game.bird.top, before);
        assert_eq!(game.poles.offset, 0.0);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_no_mutation_after_game_over() {
        let mut game = playing_game();
        let mut rng = create_test_rng();
        game_over(&mut game);
        let snapshot = (game.bird.top, game.poles.offset, game.speed, game.tick_count);
        process_tick(&mut game, &mut rng);
        assert_eq!(
            snapshot,
            (game.bird.top, game.poles.offset, game.speed, game.tick_count)
        );
    }
}
