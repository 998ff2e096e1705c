//! Runtime configuration loaded from `~/.flappy/config.json`.
//!
//! Every field is optional in the file; anything missing falls back to the
//! compile-time defaults in [`constants`](super::constants).

use super::constants::{
    BIRD_HEIGHT, BIRD_LEFT, BIRD_WIDTH, FLAP_HOLD_MS, FLAP_REPEAT_DELAY_MS, FRAME_INTERVAL_MS, PLAY_AREA_HEIGHT,
    PLAY_AREA_WIDTH, POLE_BASE_HEIGHT, POLE_GAP_OFFSET_RANGE, POLE_RUNWAY, POLE_WIDTH,
};
use crate::utils::persistence::{load_json_or_default, read_json_or_default};
use log::{warn, LevelFilter};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "config.json";

/// Play-area dimensions in simulation units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
        }
    }
}

impl AreaConfig {
    /// Whether the bird and a full-height pole pair fit inside this area.
    ///
    /// The tallest upper pole is `BASE + RANGE - 1` and the bird must still
    /// have room below it, so the height needs headroom past the combined
    /// pole height. The first pole spawns at the right edge and the bird
    /// starts level with it, so the width must leave a runway for the bird
    /// to drop into the opening gap before the pole arrives.
    pub fn is_playable(&self) -> bool {
        let tallest_pole = POLE_BASE_HEIGHT + (POLE_GAP_OFFSET_RANGE - 1) as f64;
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= BIRD_LEFT + BIRD_WIDTH + POLE_RUNWAY + POLE_WIDTH
            && self.height > tallest_pole + BIRD_HEIGHT
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between scheduled frames.
    pub frame_ms: u64,
    pub play_area: AreaConfig,
    /// Without key-release reporting, how long after an auto-repeat a flap
    /// key still counts as held.
    pub flap_hold_ms: u64,
    /// Same, for the first press, which has to outlast the OS repeat delay.
    pub flap_repeat_delay_ms: u64,
    /// `log` level name: off, error, warn, info, debug, trace.
    pub log_level: String,
    /// Fixed seed for the pole RNG. Random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_INTERVAL_MS,
            play_area: AreaConfig::default(),
            flap_hold_ms: FLAP_HOLD_MS,
            flap_repeat_delay_ms: FLAP_REPEAT_DELAY_MS,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read `~/.flappy/config.json` as written, without validation.
    ///
    /// The binary reads first so it can start logging at the configured
    /// level, then validates so the warnings land in the log.
    pub fn read() -> Self {
        load_json_or_default(CONFIG_FILENAME)
    }

    /// Load a config from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        read_json_or_default::<GameConfig>(path).validated()
    }

    /// Replace values the game cannot run with.
    pub fn validated(mut self) -> Self {
        if !self.play_area.is_playable() {
            warn!(
                "Play area {}x{} cannot fit the poles and bird, using {}x{}",
                self.play_area.width, self.play_area.height, PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT
            );
            self.play_area = AreaConfig::default();
        }
        if self.frame_ms == 0 {
            warn!("frame_ms must be at least 1, using 1");
            self.frame_ms = 1;
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            warn!("Unknown log level '{}', using info", self.log_level);
            self.log_level = "info".to_string();
        }
        self
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn flap_hold(&self) -> Duration {
        Duration::from_millis(self.flap_hold_ms)
    }

    pub fn flap_repeat_delay(&self) -> Duration {
        Duration::from_millis(self.flap_repeat_delay_ms)
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
