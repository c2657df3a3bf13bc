use std::collections::VecDeque;
use std::io;

use wrap_snake::clock::TickClock;
use wrap_snake::config::{GRID, TICKS_PER_SECOND};
use wrap_snake::controller::Controller;
use wrap_snake::food::Food;
use wrap_snake::game::Game;
use wrap_snake::geometry::Cell;
use wrap_snake::input::{Direction, GameInput, InputSource};
use wrap_snake::renderer::{Scene, Surface};

/// Replays one batch of inputs per tick, then reports no input.
#[derive(Default)]
struct ScriptedInput {
    batches: VecDeque<Vec<GameInput>>,
}

impl ScriptedInput {
    fn new(batches: Vec<Vec<GameInput>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Vec<GameInput>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}

#[derive(Default)]
struct RecordingSurface {
    frames: Vec<Scene>,
}

impl Surface for RecordingSurface {
    fn render(&mut self, scene: &Scene) -> io::Result<()> {
        self.frames.push(scene.clone());
        Ok(())
    }
}

fn game_with_food_at(food: Cell) -> Game {
    let mut game = Game::new_with_seed(GRID, 42);
    game.food = Food::at(food);
    game
}

#[test]
fn eating_then_growing_across_two_ticks() {
    let mut input = ScriptedInput::default();
    let mut surface = RecordingSurface::default();
    let mut clock = TickClock::new(TICKS_PER_SECOND);
    let mut controller = Controller::new(
        game_with_food_at(Cell::new(17, 12)),
        &mut input,
        &mut surface,
        &mut clock,
    );

    assert!(controller.step().expect("tick should succeed").is_continue());
    let game = controller.game();
    assert_eq!(game.snake.head(), Cell::new(17, 12));
    assert_eq!(game.snake.target_length(), 2);
    assert!(!game.snake.occupies(game.food.position));

    let relocated = game.food.position;
    if relocated == Cell::new(18, 12) {
        // Eating again on the next tick would change the length under test.
        return;
    }

    controller.step().expect("tick should succeed");
    let game = controller.game();
    assert_eq!(
        game.snake.segments().copied().collect::<Vec<_>>(),
        vec![Cell::new(18, 12), Cell::new(17, 12)]
    );

    assert_eq!(surface.frames.len(), 2);
    assert_eq!(surface.frames[1].head, Cell::new(18, 12));
    assert_eq!(surface.frames[1].body, vec![Cell::new(17, 12)]);
    assert_eq!(surface.frames[1].vacated, None);
}

#[test]
fn direction_input_turns_the_snake_on_the_same_tick() {
    let mut input = ScriptedInput::new(vec![
        vec![GameInput::Direction(Direction::Up)],
        vec![GameInput::Direction(Direction::Down)],
    ]);
    let mut surface = RecordingSurface::default();
    let mut clock = TickClock::new(TICKS_PER_SECOND);
    let mut controller = Controller::new(
        game_with_food_at(Cell::new(0, 0)),
        &mut input,
        &mut surface,
        &mut clock,
    );

    controller.step().expect("tick should succeed");
    assert_eq!(controller.game().snake.head(), Cell::new(16, 11));

    // Down reverses Up and is dropped.
    controller.step().expect("tick should succeed");
    assert_eq!(controller.game().snake.head(), Cell::new(16, 10));
    assert_eq!(controller.game().snake.direction(), Direction::Up);
}

#[test]
fn quit_stops_before_mutating_or_rendering() {
    let mut input = ScriptedInput::new(vec![
        Vec::new(),
        vec![GameInput::Direction(Direction::Down), GameInput::Quit],
    ]);
    let mut surface = RecordingSurface::default();
    let mut clock = TickClock::new(1_000);
    let mut controller = Controller::new(
        game_with_food_at(Cell::new(0, 0)),
        &mut input,
        &mut surface,
        &mut clock,
    );

    controller.run().expect("run should end cleanly on quit");

    let game = controller.game();
    assert_eq!(game.tick_count, 1);
    assert_eq!(game.snake.head(), Cell::new(17, 12));
    assert_eq!(game.snake.pending_direction(), None);
    assert_eq!(surface.frames.len(), 1);
}

#[test]
fn snake_wraps_around_the_right_edge() {
    let mut input = ScriptedInput::default();
    let mut surface = RecordingSurface::default();
    let mut clock = TickClock::new(TICKS_PER_SECOND);
    let mut controller = Controller::new(
        game_with_food_at(Cell::new(0, 0)),
        &mut input,
        &mut surface,
        &mut clock,
    );

    // From column 16, sixteen ticks reach column 0 of the same row.
    for _ in 0..16 {
        controller.step().expect("tick should succeed");
    }

    assert_eq!(controller.game().snake.head(), Cell::new(0, 12));
    assert_eq!(surface.frames.len(), 16);
}
