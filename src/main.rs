//! Raising Kids - Entry Point
//!
//! Sets up logging, asks who is in the family, then plays days until the
//! game ends.

use clap::{ArgAction, Parser};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use raising_kids::config::{EngineSettings, DEFAULT_DELAY_MS};
use raising_kids::simulator::{parse_age, setup_game, Decider, LineDecider, RandomDecider, SetupAnswers};
use raising_kids::{Engine, EventCatalog, GameState, GameSummary, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Raise a child to adulthood, one family crisis at a time
#[derive(Parser, Debug)]
#[command(name = "raising-kids")]
#[command(about = "Turn-based parenting simulator")]
struct Args {
    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between days, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Let the game pick answers at random
    #[arg(long)]
    autoplay: bool,

    /// Child's name (skips the prompt)
    #[arg(long)]
    child: Option<String>,

    /// Child's starting age (skips the prompt)
    #[arg(long, value_parser = parse_age)]
    age: Option<i32>,

    /// Parent's name (skips the prompt)
    #[arg(long)]
    parent: Option<String>,

    /// Print a JSON summary when the game ends
    #[arg(long)]
    json: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "game aborted");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("raising_kids={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let catalog = EventCatalog::builtin()?;
    let settings = EngineSettings::default()
        .with_seed(args.seed)
        .with_delay_ms(args.delay_ms);

    let stdin = io::stdin();
    let mut lines = LineDecider::new(stdin.lock());
    let mut out = io::stdout().lock();

    let answers = SetupAnswers {
        child_name: args.child,
        child_age: args.age,
        parent_name: args.parent,
    };
    let mut state = setup_game(&mut lines, &mut out, answers)?;

    let mut rng = settings.rng();
    tracing::info!(seed = ?settings.seed, autoplay = args.autoplay, "starting game");

    let summary = if args.autoplay {
        let decider = RandomDecider::new(ChaCha8Rng::seed_from_u64(rng.gen()));
        play(catalog, rng, decider, &mut out, &settings, &mut state)?
    } else {
        play(catalog, rng, &mut lines, &mut out, &settings, &mut state)?
    };

    if args.json {
        writeln!(out, "{}", summary.to_json()?)?;
    }
    Ok(())
}

fn play<D: Decider, W: Write>(
    catalog: &EventCatalog,
    rng: ChaCha8Rng,
    decider: D,
    out: W,
    settings: &EngineSettings,
    state: &mut GameState,
) -> Result<GameSummary> {
    let mut engine = Engine::new(catalog, rng, decider, out).with_pacing(settings.pacing);
    engine.run(state)
}
