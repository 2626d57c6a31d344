//! Word solving command
//!
//! Plays against a known secret by always taking the top recommendation,
//! recording how each outcome narrowed the candidates.

use crate::core::{Outcome, Word};
use crate::solver::Solver;
use crate::solver::entropy::outcome_metrics;
use rand::prelude::IndexedRandom;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub bits: f64,
    pub expected_remaining: f64,
}

/// Pick a random secret from the answer list
#[must_use]
pub fn random_target(solver: &Solver) -> Option<Word> {
    solver.table().answers().choose(&mut rand::rng()).copied()
}

/// Solve a specific word, starting a fresh game on `solver`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the answer list
/// - The solver runs out of recommendations
pub fn solve_word(config: SolveConfig, solver: &mut Solver) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let table = std::sync::Arc::clone(solver.table());
    if table.answer_id(&target).is_none() {
        return Err(format!("Target '{target}' is not in the answer list"));
    }

    solver.reset();
    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.candidates().len();
        let guess = solver
            .top_recommendations(1)
            .first()
            .map(|entry| entry.word)
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let guess_id = table
            .guess_id(&guess)
            .ok_or_else(|| format!("Recommended '{guess}' is not a guess word"))?;
        let metrics = outcome_metrics(&table, guess_id, solver.candidates());

        let outcome = table
            .lookup(&guess, &target)
            .ok_or_else(|| format!("No outcome for '{guess}' against '{target}'"))?;
        solver
            .observe_guess(&guess, outcome)
            .map_err(|e| e.to_string())?;

        guesses.push(GuessStep {
            word: guess,
            outcome,
            candidates_before,
            candidates_after: solver.candidates().len(),
            bits: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
        });

        if outcome.is_all_exact() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::table::OutcomeTable;
    use crate::wordlists::words_from_lines;
    use std::sync::Arc;

    const ANSWERS: [&str; 8] = [
        "slate", "irate", "crate", "grate", "trace", "crane", "plant", "eerie",
    ];

    fn setup_solver() -> Solver {
        let guesses = words_from_lines(ANSWERS.iter().copied().chain(["aeros", "zzzzz"])).unwrap();
        let answers = words_from_lines(ANSWERS).unwrap();
        let table = Arc::new(OutcomeTable::compute(guesses, answers).unwrap());
        Solver::new(table, &SolverConfig::new(2)).unwrap()
    }

    #[test]
    fn solve_every_answer() {
        let mut solver = setup_solver();

        // Every step strictly shrinks the candidates, so |answers| guesses always suffice
        for target in ANSWERS {
            let mut config = SolveConfig::new(target.to_string());
            config.max_guesses = ANSWERS.len();
            let result = solve_word(config, &mut solver).unwrap();

            assert!(result.success, "failed on {target}");
            let last = result.guesses.last().unwrap();
            assert_eq!(last.word.as_str(), target.to_uppercase());
            assert!(last.outcome.is_all_exact());
        }
    }

    #[test]
    fn solve_records_narrowing() {
        let mut solver = setup_solver();
        let result = solve_word(SolveConfig::new("grate".to_string()), &mut solver).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.bits >= 0.0);
        }
    }

    #[test]
    fn solve_rejects_non_answer() {
        let mut solver = setup_solver();
        let result = solve_word(SolveConfig::new("zzzzz".to_string()), &mut solver);
        assert!(result.is_err());

        let result = solve_word(SolveConfig::new("zz".to_string()), &mut solver);
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut solver = setup_solver();
        let mut config = SolveConfig::new("eerie".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, &mut solver).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn random_target_is_an_answer() {
        let solver = setup_solver();
        let target = random_target(&solver).unwrap();
        assert!(solver.table().answer_id(&target).is_some());
    }
}
