use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::common::config::{DEFAULT_CURVE_ACCESSES, DEFAULT_CURVE_FRAMES, DEFAULT_CURVE_PAGES};
use pagesim::task::write_task;
use pagesim::{curve_csv, run_from_files, Result, Task};

/// Page-replacement simulator: FIFO, LRU and OPT.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate every task in each file and write `<file>.out`
    Run {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Write a random task block to a file
    Generate {
        #[arg(long)]
        pages: usize,
        #[arg(long)]
        frames: usize,
        #[arg(long)]
        accesses: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print score-versus-accesses data for a random task as CSV
    Curve {
        #[arg(long, default_value_t = DEFAULT_CURVE_PAGES)]
        pages: usize,
        #[arg(long, default_value_t = DEFAULT_CURVE_FRAMES)]
        frames: usize,
        #[arg(long, default_value_t = DEFAULT_CURVE_ACCESSES)]
        accesses: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Write the CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Run { files } => {
            let outputs = run_from_files(&files)?;
            info!("wrote {} report file(s)", outputs.len());
        }
        Command::Generate {
            pages,
            frames,
            accesses,
            seed,
            output,
        } => {
            let task = Task::random(pages, frames, accesses, &mut rng(seed))?;
            write_task(&output, &task)?;
            info!("wrote {} accesses to {}", task.len(), output.display());
        }
        Command::Curve {
            pages,
            frames,
            accesses,
            seed,
            output,
        } => {
            let task = Task::random(pages, frames, accesses, &mut rng(seed))?;
            let csv = curve_csv(&task);
            match output {
                Some(path) => fs::write(path, csv)?,
                None => print!("{}", csv),
            }
        }
    }

    Ok(())
}
