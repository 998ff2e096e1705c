//! Render surface: where the game loop pushes what the player should see.
//!
//! The loop owns the canonical numbers and pushes them here after every
//! change. Nothing in the loop ever reads a surface back.

use super::types::{GamePhase, PlayArea, Rect};

pub trait RenderSurface {
    /// Upper and lower pole boxes.
    fn place_poles(&mut self, poles: &[Rect; 2]);

    fn place_bird(&mut self, bird: &Rect, flapping: bool);

    fn show_score(&mut self, score: u32);

    /// Truncated speed, or `None` to blank the readout.
    fn show_speed(&mut self, speed: Option<u32>);

    fn show_phase(&mut self, phase: GamePhase);

    /// Whether to advertise the restart control.
    fn show_restart(&mut self, visible: bool);
}

/// Buffered surface the terminal UI draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub area: PlayArea,
    pub poles: [Rect; 2],
    pub bird: Rect,
    pub flapping: bool,
    pub score: u32,
    pub speed: Option<u32>,
    pub phase: GamePhase,
    pub restart_visible: bool,
}

impl SceneView {
    /// An empty scene: nothing placed yet, restart advertised.
    pub fn new(area: PlayArea) -> Self {
        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        Self {
            area,
            poles: [empty, empty],
            bird: empty,
            flapping: false,
            score: 0,
            speed: None,
            phase: GamePhase::Idle,
            restart_visible: true,
        }
    }
}

impl RenderSurface for SceneView {
    fn place_poles(&mut self, poles: &[Rect; 2]) {
        self.poles = *poles;
    }

    fn place_bird(&mut self, bird: &Rect, flapping: bool) {
        self.bird = *bird;
        self.flapping = flapping;
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_speed(&mut self, speed: Option<u32>) {
        self.speed = speed;
    }

    fn show_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    fn show_restart(&mut self, visible: bool) {
        self.restart_visible = visible;
    }
}
