use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use oop_lessons::{run_all, Lesson, LessonConfig, Terminal};

/// Walk through the object-oriented lessons one by one.
#[derive(Parser, Debug)]
#[command(name = "oop-lessons", version, about)]
struct Cli {
    /// TOML file selecting lessons and color (defaults to ./oop-lessons.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run only this lesson; repeat to run several
    #[arg(short, long = "lesson")]
    lessons: Vec<Lesson>,

    /// Water poured into the coffee machine; below 10 aborts the abstraction lesson
    #[arg(long, allow_negative_numbers = true)]
    coffee_water: Option<i64>,

    /// Print plain text
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = LessonConfig::load_or_default(cli.config.as_deref())
        .context("could not load lesson configuration")?;
    if !cli.lessons.is_empty() {
        config.lessons = cli.lessons;
    }
    if let Some(water) = cli.coffee_water {
        config.coffee_water = water;
    }
    if cli.no_color {
        config.color = false;
    }

    let mut terminal = Terminal::new(config.color);
    run_all(&config, &mut terminal).context("lessons did not finish")?;

    Ok(())
}
