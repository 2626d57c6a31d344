//! Table generation command
//!
//! Computes the outcome table from the word lists and persists it, and
//! optionally the opening ranking, so later sessions start without any
//! outcome computation.

use crate::core::Word;
use crate::solver::cache::{CachedOpening, write_opening};
use crate::solver::{CandidateSet, ParallelRanker, Ranking};
use crate::table::OutcomeTable;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// What `generate` produced
pub struct GenerateSummary {
    pub guesses: usize,
    pub answers: usize,
    pub table_path: PathBuf,
    pub opening_path: Option<PathBuf>,
    pub best_opening: Option<(Word, f64)>,
    pub duration: Duration,
}

/// Compute an outcome table with a progress bar
///
/// # Errors
///
/// Returns an error if the word lists cannot form a table.
pub fn compute_table(guesses: Vec<Word>, answers: Vec<Word>) -> Result<OutcomeTable> {
    let pb = ProgressBar::new(guesses.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("computing outcomes");

    OutcomeTable::compute_with_progress(guesses, answers, &pb).context("cannot build outcome table")
}

/// Generate and persist the table (and optionally the opening ranking)
///
/// # Errors
///
/// Returns an error if the table cannot be built or either file cannot be written.
pub fn run_generate(
    guesses: Vec<Word>,
    answers: Vec<Word>,
    table_path: &Path,
    opening_path: Option<&Path>,
    workers: usize,
) -> Result<GenerateSummary> {
    let start = Instant::now();
    let table = compute_table(guesses, answers)?;

    table
        .save(table_path)
        .with_context(|| format!("cannot write {}", table_path.display()))?;
    log::info!("Wrote outcome table to {}", table_path.display());

    let mut best_opening = None;
    if let Some(path) = opening_path {
        let ranker = ParallelRanker::new(workers).context("cannot start ranking workers")?;
        let opening: Ranking = ranker.rank(&table, &CandidateSet::full(&table));
        best_opening = opening.best().map(|entry| (entry.word, entry.bits));
        write_opening(path, &CachedOpening::new(&table, opening))
            .with_context(|| format!("cannot write {}", path.display()))?;
        log::info!("Wrote opening ranking to {}", path.display());
    }

    Ok(GenerateSummary {
        guesses: table.guesses().len(),
        answers: table.answers().len(),
        table_path: table_path.to_path_buf(),
        opening_path: opening_path.map(Path::to_path_buf),
        best_opening,
        duration: start.elapsed(),
    })
}
