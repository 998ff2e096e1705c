//! The game loop: owns the game state, drives ticks from a frame scheduler,
//! and pushes every change to a render surface.
//!
//! Only one frame is ever pending. Starting a run cancels whatever was
//! pending from the previous one, and a crash stops scheduling, so there is
//! never more than one loop alive.

use super::logic::{self, FlappyInput, TickResult};
use super::scheduler::{FrameHandle, FrameScheduler};
use super::surface::RenderSurface;
use super::types::{FlappyGame, PlayArea};
use log::{debug, info};
use rand::Rng;

pub struct GameLoop<R: Rng> {
    game: FlappyGame,
    rng: R,
    pending: Option<FrameHandle>,
    runs: u32,
}

impl<R: Rng> GameLoop<R> {
    /// An idle loop. Nothing is scheduled until [`GameLoop::start`].
    pub fn new(area: PlayArea, rng: R) -> Self {
        Self {
            game: FlappyGame::new(area),
            rng,
            pending: None,
            runs: 0,
        }
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of runs started so far.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Push the complete current state to a surface.
    pub fn present<V: RenderSurface>(&self, surface: &mut V) {
        let game = &self.game;
        surface.place_poles(&game.poles.bounds(&game.area));
        surface.place_bird(&game.bird.bounds(), game.flapping);
        surface.show_score(game.score);
        surface.show_speed(game.speed_readout());
        surface.show_phase(game.phase);
        surface.show_restart(!game.is_playing());
    }

    /// Reset and begin a run. Safe to call at any time, including mid-run.
    pub fn start<S, V>(&mut self, scheduler: &mut S, surface: &mut V)
    where
        S: FrameScheduler,
        V: RenderSurface,
    {
        self.reset(scheduler, surface);
        self.runs += 1;
        info!(
            "Run {} started ({}x{} play area)",
            self.runs, self.game.area.width, self.game.area.height
        );
        self.tick(scheduler, surface);
    }

    /// Reinitialize all state for a fresh run and drop any pending frame.
    pub fn reset<S, V>(&mut self, scheduler: &mut S, surface: &mut V)
    where
        S: FrameScheduler,
        V: RenderSurface,
    {
        self.cancel_pending(scheduler);
        logic::reset(&mut self.game);
        self.present(surface);
    }

    /// Called by the host when a requested frame comes due.
    ///
    /// A handle other than the one this loop is waiting for belongs to a
    /// cancelled run and is ignored.
    pub fn on_frame<S, V>(&mut self, handle: FrameHandle, scheduler: &mut S, surface: &mut V)
    where
        S: FrameScheduler,
        V: RenderSurface,
    {
        if self.pending != Some(handle) {
            debug!("Ignoring stale frame {}", handle.id());
            return;
        }
        self.pending = None;
        self.tick(scheduler, surface);
    }

    /// Apply flap input and show the bird's new pose.
    pub fn handle_input<V: RenderSurface>(&mut self, input: FlappyInput, surface: &mut V) {
        logic::process_input(&mut self.game, input);
        surface.place_bird(&self.game.bird.bounds(), self.game.flapping);
    }

    fn tick<S, V>(&mut self, scheduler: &mut S, surface: &mut V) -> TickResult
    where
        S: FrameScheduler,
        V: RenderSurface,
    {
        let result = logic::process_tick(&mut self.game, &mut self.rng);

        let game = &self.game;
        surface.place_poles(&game.poles.bounds(&game.area));
        surface.place_bird(&game.bird.bounds(), game.flapping);
        if result.scored {
            surface.show_score(game.score);
        }
        if result.recycled {
            surface.show_speed(game.speed_readout());
        }

        if result.crashed {
            self.finish_run(scheduler, surface);
        } else if self.game.is_playing() {
            self.pending = Some(scheduler.request_frame());
        }
        result
    }

    fn finish_run<S, V>(&mut self, scheduler: &mut S, surface: &mut V)
    where
        S: FrameScheduler,
        V: RenderSurface,
    {
        self.cancel_pending(scheduler);
        surface.show_phase(self.game.phase);
        surface.show_restart(true);
        info!(
            "Run {} over: score {}, speed {}, {} ticks",
            self.runs, self.game.score, self.game.speed, self.game.tick_count
        );
    }

    fn cancel_pending<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
