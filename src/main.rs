use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod plan;
mod progress;
mod storage;
mod utils;

const EXIT_FAILURE: i32 = 1;

const LONG_ABOUT: &str = "\
SOI tracks a 30-day Sphere of Influence call plan.

The plan escalates weekly from 2 to 5 calls a day (108 calls in total) and pairs each
week with a focus, a call script and a quote. Soi keeps a checklist of the calls you
have made and a free-text reflection per week, saved under a local data directory
(.soi/ by default), and reports overall and weekly completion.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Show the schedule:
        $ soi plan

    Mark the first call of day 1 as made:
        $ soi toggle 1 1

    Write a reflection for week 2:
        $ soi reflect 2 \"Collected 12 emails\"

    Check progress:
        $ soi status

    Keep progress somewhere else:
        $ SOI_DIR=~/soi soi status

TROUBLESHOOTING:
    Saved progress that is unreadable is ignored and a fresh plan is used.
    If the checklist looks wrong, `soi reshape` fits saved progress to the
    current plan and `soi reset` clears it entirely.";

#[derive(Parser)]
#[command(name = "soi")]
#[command(version)]
#[command(about = "30-day Sphere of Influence call plan tracker")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Directory holding saved progress
    #[arg(long, global = true, env = "SOI_DIR", default_value = utils::fs::DEFAULT_DATA_DIR)]
    dir: PathBuf,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the 30-day schedule and weekly call targets
    Plan,

    /// Show a week's focus, script, quote, progress and reflection
    Week {
        /// Week number (1-4)
        week: usize,
    },

    /// Show overall and weekly progress with the daily checklist
    #[command(after_help = "\
OUTPUT:
    SOI 30-Day Call Plan
    ────────────────────
    Progress: 6% complete (7/108 calls)
    Saved:    2026-01-04T18:02:11Z

    Week 1: 14% (2/14 calls)
    ...
    Day  1  [x] 1  [x] 2
    Day  2  [ ] 1  [ ] 2")]
    Status,

    /// Mark a call as made, or unmark it
    Toggle {
        /// Day number (1-30)
        day: usize,
        /// Call number within the day
        call: usize,
    },

    /// Replace a week's reflection note
    #[command(long_about = "\
Replace a week's reflection note.

The text is stored exactly as given, including surrounding whitespace.
Pass an empty string to clear the note.")]
    Reflect {
        /// Week number (1-4)
        week: usize,
        /// Reflection text
        text: String,
    },

    /// Fit saved progress to the current plan
    #[command(long_about = "\
Fit saved progress to the current plan.

Saved progress is used exactly as stored, even when it was written for a different
plan. This pads or trims each day to its planned number of calls, keeps exactly 30
days and 4 reflections, and preserves every call that still fits.")]
    Reshape,

    /// Delete all saved progress
    Reset,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "soi=debug" } else { "soi=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(dir = %cli.dir.display(), "using data directory");

    let result = match cli.command {
        Commands::Plan => {
            commands::plan::run();
            Ok(())
        }
        Commands::Week { week } => commands::week::run(&cli.dir, week),
        Commands::Status => commands::status::run(&cli.dir),
        Commands::Toggle { day, call } => commands::toggle::run(&cli.dir, day, call),
        Commands::Reflect { week, text } => commands::reflect::run(&cli.dir, week, &text),
        Commands::Reshape => commands::reshape::run(&cli.dir),
        Commands::Reset => commands::reset::run(&cli.dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }
}
