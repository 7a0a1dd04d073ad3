//! Terminal display for priority rotation
//!
//! All output goes to stderr so stdout stays clean for piping: the only
//! thing written to stdout is the successor level itself.

use std::fmt::Display;

use colored::Colorize;

use crate::cycle::priority::PriorityCycle;
use crate::log::jsonl::RotationRecord;

/// Print the cycle as `low -> medium -> high -> low`, then the level new
/// todos start at
pub fn print_cycle<T: Display>(cycle: &PriorityCycle<T>, default_level: &str) {
    eprintln!("\n{}", "=== Priority cycle".bold().cyan());
    eprintln!("{}", "─".repeat(50).dimmed());

    if cycle.is_empty() {
        eprintln!("  {}", "(no levels configured)".dimmed());
        return;
    }

    eprintln!("  {}", cycle.to_string().bold());
    eprintln!("  {} {}", "Default:".dimmed(), default_level);
    eprintln!();
}

/// Print a successful rotation
pub fn print_rotation(from: &str, to: &str) {
    eprintln!("  {} {} {} {}", "✓".green().bold(), from, "→".blue(), to.bold());
}

/// Print the "no successor" outcome for a level the cycle does not know
pub fn print_unknown_level<T: Display>(level: &str, cycle: &PriorityCycle<T>) {
    eprintln!(
        "  {} {}",
        "✗".red().bold(),
        format!("Unknown priority '{level}', leaving it unchanged").red()
    );
    eprintln!(
        "  {} {}",
        "Known levels:".dimmed(),
        format_levels(cycle.levels())
    );
}

/// Print the rotation history, oldest first
pub fn print_history(records: &[RotationRecord]) {
    eprintln!("\n{}", "=== Rotation history".bold().cyan());
    eprintln!("{}", "─".repeat(50).dimmed());

    if records.is_empty() {
        eprintln!("  {}", "No rotations logged yet".dimmed());
    }
    for record in records {
        eprintln!("  {}", format_record(record));
    }

    eprintln!("{}", "─".repeat(50).dimmed());
    eprintln!("  {} {}", records.len(), "rotation(s)".dimmed());
    eprintln!();
}

/// Join levels as `low, medium, high`
#[must_use]
pub fn format_levels<I>(levels: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    levels
        .into_iter()
        .map(|level| level.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One history line: `2026-01-01 12:00:00 #4 high -> low`
#[must_use]
pub fn format_record(record: &RotationRecord) -> String {
    let todo = record
        .todo_id
        .map_or_else(String::new, |id| format!(" #{id}"));
    format!(
        "{}{todo} {} -> {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
        record.from,
        record.to
    )
}
