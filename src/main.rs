use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

mod input;
mod output;
mod quiz;

use crate::input::console::ConsoleInput;
use crate::output::console::ConsoleOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::settings::{Mode, Settings};
use crate::quiz::Quiz;

/// Administers a timed quiz loaded from a CSV file.
#[derive(Debug, Parser)]
#[command(name = "quiz")]
struct Args {
    /// A csv file in the format of 'question,answer'
    #[arg(long, default_value = "problems.csv")]
    csv: PathBuf,

    /// The time limit for the quiz in seconds
    #[arg(long, default_value_t = 30)]
    limit: u64,

    /// Run without a countdown (answers get no per-problem feedback)
    #[arg(long)]
    untimed: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let mode = if self.untimed {
            Mode::Untimed
        } else {
            Mode::Timed {
                limit: Duration::from_secs(self.limit),
            }
        };
        Settings { mode }
    }
}

fn run(args: &Args) -> Result<()> {
    let definition = QuizDefinition::open(&args.csv)
        .with_context(|| format!("Failed to read the quiz file: {}", args.csv.display()))?;
    log::info!("Loaded {} problems", definition.get_problems().len());

    let quiz = Quiz::new(
        definition,
        args.settings(),
        ConsoleInput::new(),
        ConsoleOutput::new(),
    );
    let score = quiz.run();
    log::info!("Session over: {}/{}", score.correct, score.total);

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
