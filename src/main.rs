//! Tilt Maze entry point
//!
//! Headless native run: sizes an arena, feeds it samples from a simulated
//! gyroscope and prints the final state as JSON.
//!
//! Usage: `tilt-maze [settings.json] [width height] [seed] [samples]`

use tilt_maze::platform::RandomWalkSource;
use tilt_maze::sim::StepOutcome;
use tilt_maze::{Session, Settings};

const DEFAULT_ARENA: (f32, f32) = (400.0, 400.0);
const DEFAULT_SEED: u64 = 12345;
const DEFAULT_SAMPLES: usize = 2_000;

/// Parse a positional argument, warning and falling back on garbage
fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str, default: T) -> T {
    match args.get(index) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} '{}', using default", name, raw);
            default
        }),
        None => default,
    }
}

fn main() {
    env_logger::init();
    log::info!("Tilt Maze (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let settings = match args.first() {
        Some(path) if path != "-" => Settings::load(path),
        _ => Settings::default(),
    };
    let width = parse_arg(&args, 1, "width", DEFAULT_ARENA.0);
    let height = parse_arg(&args, 2, "height", DEFAULT_ARENA.1);
    let seed = parse_arg(&args, 3, "seed", DEFAULT_SEED);
    let samples = parse_arg(&args, 4, "samples", DEFAULT_SAMPLES);

    let mut session = Session::new(&settings);
    if !session.on_arena_sized(width, height) {
        log::warn!(
            "Arena {}x{} rejected, using {}x{}",
            width,
            height,
            DEFAULT_ARENA.0,
            DEFAULT_ARENA.1
        );
        if !session.on_arena_sized(DEFAULT_ARENA.0, DEFAULT_ARENA.1) {
            log::warn!("Default arena rejected too; the ball will not move");
        }
    }

    let mut source = RandomWalkSource::new(seed, samples);
    let applied = session.drain_with(&mut source, |outcome, count| {
        if outcome == StepOutcome::Won {
            log::info!("Won after {} samples", count);
        }
    });
    log::info!(
        "Applied {} of {} samples with seed {}",
        applied,
        samples,
        seed
    );

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
