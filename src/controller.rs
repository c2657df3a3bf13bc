use std::ops::ControlFlow;

use tracing::info;

use crate::clock::TickClock;
use crate::error::Result;
use crate::game::Game;
use crate::input::{GameInput, InputSource};
use crate::renderer::Surface;

/// Drives the game one fixed-rate tick at a time.
///
/// The input source, the surface and the clock are created once at process
/// start and only borrowed here.
pub struct Controller<'a, I, S> {
    game: Game,
    input: &'a mut I,
    surface: &'a mut S,
    clock: &'a mut TickClock,
}

impl<'a, I: InputSource, S: Surface> Controller<'a, I, S> {
    pub fn new(game: Game, input: &'a mut I, surface: &'a mut S, clock: &'a mut TickClock) -> Self {
        Self {
            game,
            input,
            surface,
            clock,
        }
    }

    /// Runs ticks until the input source asks to quit.
    pub fn run(&mut self) -> Result<()> {
        info!(
            width = self.game.bounds().width,
            height = self.game.bounds().height,
            "game started"
        );

        while self.step()?.is_continue() {
            self.clock.wait();
        }

        info!(ticks = self.game.tick_count, "quit requested");
        Ok(())
    }

    /// Executes one complete tick: input, simulation, render.
    ///
    /// A quit request breaks before any state change or render.
    pub fn step(&mut self) -> Result<ControlFlow<()>> {
        let inputs = self.input.poll()?;
        if inputs.contains(&GameInput::Quit) {
            return Ok(ControlFlow::Break(()));
        }

        for input in inputs {
            self.game.apply_input(input);
        }

        let _ = self.game.tick();
        self.surface.render(&self.game.scene())?;

        Ok(ControlFlow::Continue(()))
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }
}
