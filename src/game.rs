use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GridSize;
use crate::food::Food;
use crate::input::GameInput;
use crate::renderer::Scene;
use crate::snake::Snake;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickReport {
    pub ate_food: bool,
    /// The head ran into the body and the snake was reset.
    pub collided: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl Game {
    /// Creates a game seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(bounds);
        let food = Food::spawn(&mut rng, bounds, &snake.occupied_cells());

        Self {
            snake,
            food,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Applies one external input event. Quit is handled by the controller.
    pub fn apply_input(&mut self, input: GameInput) {
        if let GameInput::Direction(direction) = input {
            self.snake.request_direction_change(direction);
        }
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        self.tick_count += 1;

        self.snake.apply_pending_direction();
        self.snake.advance();

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.food
                .relocate(&mut self.rng, self.bounds, &self.snake.occupied_cells());
            report.ate_food = true;
            debug!(
                tick = self.tick_count,
                target_length = self.snake.target_length(),
                food = ?self.food.position,
                "food eaten"
            );
        }

        if self.snake.detect_self_collision() {
            info!(
                tick = self.tick_count,
                length = self.snake.len(),
                "self collision, resetting snake"
            );
            self.snake.reset();
            report.collided = true;
        }

        report
    }

    /// Captures what the surface needs to draw the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene {
            head: self.snake.head(),
            body: self.snake.segments().skip(1).copied().collect(),
            food: self.food.position,
            vacated: self.snake.vacated(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
