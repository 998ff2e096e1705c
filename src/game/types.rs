//! Flappy data structures: the bird, the pole pair, and the game state.

use crate::core::constants::{
    BIRD_HEIGHT, BIRD_LEFT, BIRD_START_FRACTION, BIRD_WIDTH, INITIAL_SPEED, PLAY_AREA_HEIGHT,
    PLAY_AREA_WIDTH, POLE_BASE_HEIGHT, POLE_WIDTH,
};

/// Axis-aligned rectangle in play-area units. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True if the point lies inside the rectangle (left/top edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Fixed-size play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
        }
    }
}

impl PlayArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The bird. Only its vertical position moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Distance from the ceiling to the bird's top edge.
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bird {
    /// A bird at its starting height for the given area.
    pub fn new(area: &PlayArea) -> Self {
        Self {
            top: area.height * BIRD_START_FRACTION,
            left: BIRD_LEFT,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }

    /// Lowest `top` the bird can fall to.
    pub fn floor(&self, area: &PlayArea) -> f64 {
        area.height - self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// The pole pair: one pole hanging from the ceiling, one standing on the
/// floor, scrolling together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poles {
    /// Distance scrolled from the right edge of the play area.
    pub offset: f64,
    /// Height of the upper pole.
    pub upper: f64,
    /// Height of the lower pole.
    pub lower: f64,
    pub width: f64,
}

impl Default for Poles {
    fn default() -> Self {
        Self {
            offset: 0.0,
            upper: POLE_BASE_HEIGHT,
            lower: POLE_BASE_HEIGHT,
            width: POLE_WIDTH,
        }
    }
}

impl Poles {
    /// Set the pole heights from a gap offset: the gap shifts down as the offset grows.
    pub fn set_gap_offset(&mut self, gap_offset: u32) {
        self.upper = POLE_BASE_HEIGHT + gap_offset as f64;
        self.lower = POLE_BASE_HEIGHT - gap_offset as f64;
    }

    /// Left edge of both poles in play-area coordinates.
    pub fn left(&self, area: &PlayArea) -> f64 {
        area.width - self.offset - self.width
    }

    /// Bounding boxes of the upper and lower pole.
    pub fn bounds(&self, area: &PlayArea) -> [Rect; 2] {
        let x = self.left(area);
        [
            Rect::new(x, 0.0, self.width, self.upper),
            Rect::new(x, area.height - self.lower, self.width, self.lower),
        ]
    }
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Launched, waiting for the first start.
    Idle,
    Playing,
    GameOver,
}

/// Complete mutable state of one Flappy session.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub area: PlayArea,
    pub bird: Bird,
    pub poles: Poles,
    pub phase: GamePhase,

    /// Units the poles scroll per tick.
    pub speed: f64,
    /// Poles passed this run.
    pub score: u32,
    /// Latched once the current pole pair has been scored; cleared on recycle.
    pub score_updated: bool,
    /// Poles recycled this run. Zero means the speed readout stays blank.
    pub recycles: u32,

    /// Flap control is held down.
    pub flapping: bool,

    /// Ticks processed this run.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create an idle game for the given area.
    pub fn new(area: PlayArea) -> Self {
        Self {
            area,
            bird: Bird::new(&area),
            poles: Poles::default(),
            phase: GamePhase::Idle,
            speed: INITIAL_SPEED,
            score: 0,
            score_updated: false,
            recycles: 0,
            flapping: false,
            tick_count: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Lowest `top` the bird can fall to.
    pub fn floor(&self) -> f64 {
        self.bird.floor(&self.area)
    }

    /// Speed as the readout shows it: truncated, and absent until the first recycle.
    pub fn speed_readout(&self) -> Option<u32> {
        (self.recycles > 0).then(|| self.speed as u32)
    }
}
