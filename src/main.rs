use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::constants::IDLE_POLL_MS;
use flappy::game::{FlappyInput, FrameClock, GameLoop, PlayArea, SceneView};
use flappy::input::{map_event, FlapHold, FlapSource, GameInput};
use flappy::ui::draw_ui;
use flappy::utils::build_info;
use flappy::utils::persistence::data_path;
use flappy::GameConfig;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const LOG_FILENAME: &str = "flappy.log";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play { seed: Option<u64> },
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut seed = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--seed needs a value".to_string())?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                seed = Some(parsed);
            }
            other => return Err(format!("Unknown command: {}", other)),
        }
    }
    Ok(Command::Play { seed })
}

fn print_help() {
    println!("Flappy - hold to climb, release to fall\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed <n>  Use a fixed seed for pole gaps");
    println!("  --version   Show version information");
    println!("  --help      Show this help message");
    println!();
    println!("Controls: Space/Up/W or left mouse button to flap, R/Enter to (re)start, Q/Esc to quit.");
    println!("Config: ~/.flappy/config.json   Log: ~/.flappy/{}", LOG_FILENAME);
}

fn init_logging(config: &GameConfig) {
    let result = data_path(LOG_FILENAME)
        .and_then(|path| simple_logging::log_to_file(path, config.log_level_filter()));
    if let Err(e) = result {
        eprintln!("Logging disabled: {}", e);
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli_seed = match parse_args(&args) {
        Ok(Command::Play { seed }) => seed,
        Ok(Command::Version) => {
            println!("{}", build_info::version_string());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = GameConfig::read();
    init_logging(&config);
    let config = config.validated();
    info!("Starting {}", build_info::version_string());

    let rng = match cli_seed.or(config.seed) {
        Some(seed) => {
            info!("Using pole seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let releases_reported = matches!(supports_keyboard_enhancement(), Ok(true));
    if releases_reported {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    info!("Key release events reported: {}", releases_reported);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &config, rng, releases_reported);
    if let Err(ref e) = result {
        error!("Game loop failed: {}", e);
    }

    // Cleanup terminal
    if releases_reported {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting");
    result
}

/// Event and frame loop. Returns when the player quits.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &GameConfig,
    rng: StdRng,
    releases_reported: bool,
) -> io::Result<()> {
    let area = PlayArea::new(config.play_area.width, config.play_area.height);
    let mut clock = FrameClock::new(config.frame_interval());
    let mut scene = SceneView::new(area);
    let mut game_loop = GameLoop::new(area, rng);
    let mut flap_hold = FlapHold::new(
        config.flap_hold(),
        config.flap_repeat_delay(),
        releases_reported,
    );
    game_loop.present(&mut scene);

    loop {
        terminal.draw(|f| draw_ui(f, &scene))?;

        let now = Instant::now();
        let timeout = [clock.time_until_due(now), flap_hold.time_until_expiry(now)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            let event = event::read()?;
            match map_event(&event) {
                GameInput::Quit => break,
                GameInput::Restart => {
                    flap_hold.release();
                    game_loop.start(&mut clock, &mut scene);
                }
                GameInput::FlapStart(source) => {
                    if source == FlapSource::Key {
                        flap_hold.press(Instant::now());
                    }
                    game_loop.handle_input(FlappyInput::FlapStart, &mut scene);
                }
                GameInput::FlapEnd(source) => {
                    if source == FlapSource::Key {
                        flap_hold.release();
                    }
                    game_loop.handle_input(FlappyInput::FlapEnd, &mut scene);
                }
                GameInput::Ignored => {}
            }
        }

        let now = Instant::now();
        if flap_hold.expire(now) {
            game_loop.handle_input(FlappyInput::FlapEnd, &mut scene);
        }
        if let Some(handle) = clock.poll_due(now) {
            game_loop.on_frame(handle, &mut clock, &mut scene);
        }
    }

    Ok(())
}
