// Frame timing
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const IDLE_POLL_MS: u64 = 100; // input poll timeout when no frame is pending
pub const FLAP_HOLD_MS: u64 = 180; // gap between auto-repeats that counts as a release
pub const FLAP_REPEAT_DELAY_MS: u64 = 700; // wait for the first auto-repeat (X11 default delay is 660)

// Play area (simulation units, scaled to terminal cells when drawn)
pub const PLAY_AREA_WIDTH: f64 = 400.0;
pub const PLAY_AREA_HEIGHT: f64 = 400.0;

// Bird
pub const BIRD_LEFT: f64 = 60.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const BIRD_STEP: f64 = 2.0; // units per tick, up while flapping, down otherwise
pub const BIRD_START_FRACTION: f64 = 0.2; // of play-area height, from the top

// Poles
pub const POLE_WIDTH: f64 = 50.0;
pub const POLE_BASE_HEIGHT: f64 = 100.0; // heights are BASE + gap and BASE - gap
pub const POLE_GAP_OFFSET_RANGE: u32 = 100; // gap offset drawn from 0..RANGE
pub const POLE_COMBINED_HEIGHT: f64 = 2.0 * POLE_BASE_HEIGHT;
pub const POLE_RUNWAY: f64 = 100.0; // min distance from the bird to the first pole's left edge

// Difficulty
pub const INITIAL_SPEED: f64 = 2.0;
pub const SPEED_INCREMENT: f64 = 0.25; // per pole recycle
