//! Flappy Engine headless runner
//!
//! Plays one session with the built-in autopilot and reports the result.

use clap::{Parser, ValueEnum};
use flappy_engine::audio::AudioCues;
use flappy_engine::config::{Difficulty, MapKind, Selection, Viewport};
use flappy_engine::Game;
use flappy_engine::sim::autopilot;

#[derive(Parser, Debug)]
#[command(name = "flappy-engine")]
#[command(about = "Run one autopilot session of the flappy engine and report the score")]
struct Args {
    #[arg(long, value_enum, default_value_t = CliDifficulty::Normal)]
    difficulty: CliDifficulty,

    #[arg(long, value_enum, default_value_t = CliMap::Default)]
    map: CliMap,

    /// Seed for obstacle generation
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Stop after this many ticks even if the session is still running
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Print the final snapshot as JSON instead of a summary line
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliDifficulty {
    Easy,
    Normal,
    Hard,
}

impl From<CliDifficulty> for Difficulty {
    fn from(value: CliDifficulty) -> Self {
        match value {
            CliDifficulty::Easy => Difficulty::Easy,
            CliDifficulty::Normal => Difficulty::Normal,
            CliDifficulty::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMap {
    Default,
    City,
    Forest,
}

impl From<CliMap> for MapKind {
    fn from(value: CliMap) -> Self {
        match value {
            CliMap::Default => MapKind::Classic,
            CliMap::City => MapKind::City,
            CliMap::Forest => MapKind::Forest,
        }
    }
}

fn run(args: &Args) -> Result<(), serde_json::Error> {
    let selection = Selection {
        difficulty: args.difficulty.into(),
        map: args.map.into(),
        ..Selection::default()
    };
    let mut game = Game::new(selection, Viewport::LOGICAL);

    let audio = AudioCues::new();
    let mut cue_count = 0usize;

    if let Some(event) = game.start(args.seed) {
        cue_count += audio.cues(&[event]).len();
    }

    while game.is_running() && game.session().tick < args.max_ticks {
        if autopilot::wants_flap(game.session(), game.settings()) {
            game.flap();
        }
        let result = game.tick();
        cue_count += audio.cues(&result.events).len();
    }

    let session = game.session();
    log::info!(
        "Finished: difficulty={}, map={}, seed={}, score={}, ticks={}, cause={:?}, cues={}",
        game.settings().difficulty.as_str(),
        game.settings().map.as_str(),
        args.seed,
        session.score,
        session.tick,
        session.cause,
        cue_count
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        println!(
            "score {} after {} ticks ({:?})",
            session.score, session.tick, session.cause
        );
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("Failed to encode snapshot: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native only
}
