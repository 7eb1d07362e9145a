//! tasksort CLI - prints a topological order of task/dependency pairs

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use tasksort::{input, topo_sort, DependencyMap, FixSuggestion, TaskSortError};

#[derive(Parser)]
#[command(name = "tasksort")]
#[command(about = "Order tasks so every dependency runs first (prints `cycle` if impossible)")]
#[command(version)]
struct Cli {
    /// Input file of alternating task / dependency lines (default: stdin)
    file: Option<PathBuf>,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the order
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TaskSortError> {
    let lines = input::read_source(cli.file.as_deref())?;
    let outcome = topo_sort(DependencyMap::from_lines(lines));

    let mut stdout = io::stdout().lock();
    for line in outcome.lines() {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}
