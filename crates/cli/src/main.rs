//! Coursekit CLI - browse the 30 day course and track progress.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use coursekit_core::{Catalog, EventKind, LessonCard, LessonStatus};
use coursekit_progress::{ProgressError, ProgressStore, TimeLedger};
use coursekit_storage::JsonFileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coursekit")]
#[command(about = "Track progress through a 30 day course", long_about = None)]
struct Cli {
    /// Directory holding saved progress
    #[arg(long, global = true, default_value = ".coursekit")]
    data_dir: PathBuf,

    /// Replacement lesson catalog (JSON array of lessons)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all lessons
    List,
    /// Search lessons by title, description or topic
    Search {
        /// Search text; empty shows everything
        #[arg(default_value = "")]
        query: String,
    },
    /// Mark a lesson complete
    Complete {
        /// Lesson day (1-30)
        day: u32,
    },
    /// Open a lesson
    Open {
        /// Lesson day (1-30)
        day: u32,
    },
    /// Show progress statistics
    Stats,
    /// Record or show time spent on pages
    Time {
        /// Page path
        page: Option<String>,
        /// Milliseconds spent
        millis: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&json)
                .with_context(|| format!("loading catalog {}", path.display()))?
        }
        None => Catalog::builtin(),
    };

    let storage = JsonFileStore::open(&cli.data_dir)
        .with_context(|| format!("opening {}", cli.data_dir.display()))?;
    debug!(path = %storage.path().display(), "using storage");

    let mut store = ProgressStore::open(catalog, storage);
    store.on_completed(|e| println!("✔ Day {} complete!", e.kind.day()));
    store.on_locked(|e| {
        println!("🔒 Day {} is still locked. Finish the earlier lessons first.", e.kind.day())
    });
    store.on_navigate(|e| {
        if let EventKind::NavigateTo { day, path } = &e.kind {
            println!("→ Day {}: {}", day, path);
        }
    });

    match cli.command {
        Commands::List => {
            let cards = store.lesson_cards();
            for card in &cards {
                print_card(card);
            }
        }
        Commands::Search { query } => {
            let cards = store.search_cards(&query);
            if query.trim().is_empty() {
                println!("All lessons ({})", cards.len());
            } else if cards.is_empty() {
                println!("No results for \"{}\"", query);
            } else {
                println!("{} result(s) for \"{}\"", cards.len(), query);
            }
            for card in &cards {
                print_card(card);
            }
        }
        Commands::Complete { day } => {
            if !check_day(store.mark_complete(day))? {
                println!("Day {} was already complete", day);
            }
        }
        Commands::Open { day } => {
            check_day(store.open_lesson(day))?;
        }
        Commands::Stats => {
            let stats = store.compute_stats();
            println!("Progress: {}%", stats.percentage);
            println!("  Completed: {}", stats.completed_count);
            println!("  Remaining: {}", stats.remaining_count);
            println!("  Streak:    {}", stats.streak);
            println!("  Next lesson: day {}", store.unlock_cursor());
        }
        Commands::Time { page, millis } => {
            let mut ledger = TimeLedger::load(store.storage());
            match (page, millis) {
                (Some(page), Some(ms)) => {
                    ledger.record(page.as_str(), Duration::from_millis(ms));
                    ledger.persist(store.storage_mut())?;
                    println!("{}: {}", page, format_duration(ledger.total(&page)));
                }
                (Some(page), None) => {
                    println!("{}: {}", page, format_duration(ledger.total(&page)));
                }
                (None, _) => {
                    if ledger.is_empty() {
                        println!("No time recorded");
                    }
                    for (page, spent) in ledger.entries() {
                        println!("  {} {}", format_duration(spent), page);
                    }
                }
            }
        }
    }

    Ok(())
}

fn check_day<T>(result: Result<T, ProgressError>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(ProgressError::InvalidDay(n)) => bail!("no lesson for day {} (expected 1-30)", n),
    }
}

fn print_card(card: &LessonCard) {
    println!(
        "  {:>2} {:<6} {}",
        card.lesson.day,
        format_status(card.status),
        card.lesson.title
    );
    if !card.lesson.topics.is_empty() {
        println!("            {}", card.lesson.topics.join(" · "));
    }
}

fn format_status(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => "DONE",
        LessonStatus::Available => "OPEN",
        LessonStatus::Locked => "LOCKED",
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}m {:02}s", secs / 60, secs % 60)
}
