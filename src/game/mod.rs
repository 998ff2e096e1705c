//! Flappy game core.
//!
//! The bird falls a fixed step each tick and climbs while the flap control
//! is held. A pole pair scrolls in from the right, wrapping around with a new
//! gap and a little more speed each time. Touching a pole, the ceiling, or the
//! floor ends the run.

pub mod logic;
pub mod runner;
pub mod scheduler;
pub mod surface;
pub mod types;

pub use logic::{check_collision, FlappyInput, TickResult};
pub use runner::GameLoop;
pub use scheduler::{FrameClock, FrameHandle, FrameScheduler};
pub use surface::{RenderSurface, SceneView};
pub use types::{Bird, FlappyGame, GamePhase, PlayArea, Poles, Rect};
