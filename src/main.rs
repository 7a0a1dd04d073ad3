//! Todo priority - cyclic priority rotation
//!
//! CLI entry point: prints the priority that follows a given level.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use todo_priority::cli::display;
use todo_priority::cycle::config::PriorityConfig;
use todo_priority::log::{RotationLog, RotationRecord};

/// Cyclic priority rotation for todo lists
///
/// Rotates a priority level to its successor, wrapping from the highest
/// level back to the lowest.
#[derive(Parser, Debug)]
#[command(name = "todo-priority", version, about)]
struct Cli {
    /// Path to a priorities.toml file (built-in low/medium/high when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the rotation log (.todo-priority by default)
    #[arg(long, global = true, default_value = ".todo-priority")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print the priority that follows LEVEL
    Next {
        /// Current priority level
        level: String,

        /// Todo the rotation applies to, recorded in the log
        #[arg(long)]
        todo_id: Option<u64>,
    },
    /// Show the configured priority cycle
    Show,
    /// Show logged rotations
    History,
}

/// Load the config file if one was given, otherwise the built-in levels.
fn load_config(path: Option<&Path>) -> Result<PriorityConfig> {
    path.map_or_else(
        || Ok(PriorityConfig::default()),
        |path| {
            PriorityConfig::from_path(path)
                .with_context(|| format!("Failed to load config from '{}'", path.display()))
        },
    )
}

/// Result of the `next` command
#[derive(Debug, PartialEq, Eq)]
enum NextOutcome {
    /// The level had a successor, which was printed to stdout
    Rotated(String),
    /// The level is not part of the cycle; nothing was printed or logged
    Unknown,
}

/// Print the successor of `level` to stdout, then record the rotation.
///
/// A failure to record is reported as a warning: the successor has already
/// been computed and printed.
fn run_next(
    config: &PriorityConfig,
    log_dir: &Path,
    level: &str,
    todo_id: Option<u64>,
) -> NextOutcome {
    let cycle = config.build_cycle();

    let Some(next) = cycle.successor_of(level) else {
        display::print_unknown_level(level, &cycle);
        return NextOutcome::Unknown;
    };

    println!("{next}");
    display::print_rotation(level, next);

    if let Err(err) = log_rotation(log_dir, &RotationRecord::now(level, next, todo_id)) {
        eprintln!("Warning: rotation was not recorded: {err:#}");
    }

    NextOutcome::Rotated(next.clone())
}

/// Append one rotation to the JSONL history in `log_dir`.
fn log_rotation(log_dir: &Path, record: &RotationRecord) -> Result<()> {
    let log = RotationLog::new(log_dir).context("Failed to initialize rotation log")?;
    log.append(record).context("Failed to write to JSONL log")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Next { level, todo_id } => {
            if run_next(&config, &cli.log_dir, &level, todo_id) == NextOutcome::Unknown {
                std::process::exit(1);
            }
        }
        Command::Show => display::print_cycle(&config.build_cycle(), config.default_level()),
        Command::History => {
            let records = RotationLog::open(&cli.log_dir)
                .read_all()
                .context("Failed to read rotation history")?;
            display::print_history(&records);
        }
    }

    Ok(())
}
