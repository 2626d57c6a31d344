//! Wordle Information - CLI
//!
//! Recommends Wordle guesses ranked by expected information, backed by a
//! precomputed outcome table.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_information::{
    commands::{
        SolveConfig, analyze_word, compute_table, random_target, run_generate, run_simple,
        solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_generate_summary, print_ranking, print_solve_result},
    solver::{Solver, SolverConfig, cache::read_opening},
    table::OutcomeTable,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_information",
    about = "Rank Wordle guesses by expected information (bits)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess word list, one word per line
    #[arg(short, long, global = true, default_value = "guesses.txt")]
    guesses: PathBuf,

    /// Answer word list, one word per line (every answer must be a guess word)
    #[arg(short, long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Precomputed outcome table (computed in memory when absent)
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    /// Cached opening ranking written by `generate --opening-out`
    #[arg(short, long, global = true)]
    opening: Option<PathBuf>,

    /// Ranking worker threads (default: available parallelism)
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Number of recommendations to show
    #[arg(short = 'n', long, global = true)]
    top: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the outcome table and write it to disk
    Generate {
        /// Output path for the outcome table
        #[arg(long)]
        out: PathBuf,

        /// Also rank the opening position and write it here
        #[arg(long)]
        opening_out: Option<PathBuf>,
    },

    /// Show the best opening guesses
    Rank,

    /// Analyze the expected information of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Interactive session: enter guesses and outcomes (default)
    Suggest,

    /// Play against a target word following the top recommendation
    Solve {
        /// The target word (random answer if omitted)
        word: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = cli.workers.map_or_else(SolverConfig::default, SolverConfig::new);
    if let Some(top) = cli.top {
        config = config.with_top_n(top);
    }

    let guesses = load_from_file(&cli.guesses)
        .with_context(|| format!("cannot load guess list {}", cli.guesses.display()))?;
    let answers = load_from_file(&cli.answers)
        .with_context(|| format!("cannot load answer list {}", cli.answers.display()))?;

    // Default to the interactive session if no command given
    let command = cli.command.unwrap_or(Commands::Suggest);

    if let Commands::Generate { out, opening_out } = &command {
        let summary = run_generate(guesses, answers, out, opening_out.as_deref(), config.workers)?;
        print_generate_summary(&summary);
        return Ok(());
    }

    let table = Arc::new(load_table(cli.table.as_deref(), guesses, answers)?);
    let mut solver = match &cli.opening {
        Some(path) => {
            let opening = read_opening(path)
                .with_context(|| format!("cannot load opening ranking {}", path.display()))?;
            Solver::with_opening(table, &config, opening)?
        }
        None => Solver::new(table, &config)?,
    };

    match command {
        Commands::Rank => {
            print_ranking(
                "BEST OPENING GUESSES",
                solver.top_recommendations(config.top_n),
                solver.candidates().len(),
            );
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Suggest => run_simple(&mut solver, config.top_n).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => run_solve_command(word, verbose, &mut solver),
        Commands::Generate { .. } => Ok(()),
    }
}

fn load_table(path: Option<&Path>, guesses: Vec<Word>, answers: Vec<Word>) -> Result<OutcomeTable> {
    match path {
        Some(path) => OutcomeTable::load(path, guesses, answers)
            .with_context(|| format!("cannot load outcome table {}", path.display())),
        None => {
            log::info!("No --table given, computing outcomes in memory");
            compute_table(guesses, answers)
        }
    }
}

fn run_solve_command(word: Option<String>, verbose: bool, solver: &mut Solver) -> Result<()> {
    let target = match word {
        Some(word) => word,
        None => random_target(solver)
            .context("answer list is empty")?
            .to_string(),
    };

    let result = solve_word(SolveConfig::new(target), solver).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}
