//! Wordle Information
//!
//! Recommends the Wordle guess expected to reveal the most information about
//! the secret word, using a precomputed outcome table and parallel entropy
//! ranking.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_information::core::Outcome;
//! use wordle_information::solver::{Solver, SolverConfig};
//! use wordle_information::table::OutcomeTable;
//! use wordle_information::wordlists::words_from_lines;
//!
//! let guesses = words_from_lines(["crane", "slate", "irate", "trace"]).unwrap();
//! let answers = words_from_lines(["slate", "irate", "trace"]).unwrap();
//! let table = Arc::new(OutcomeTable::compute(guesses, answers).unwrap());
//!
//! let mut solver = Solver::new(table, &SolverConfig::default()).unwrap();
//! for entry in solver.top_recommendations(3) {
//!     println!("{}: {:.3} bits", entry.word, entry.bits);
//! }
//!
//! solver.observe_guess(&"crane".parse().unwrap(), Outcome::parse("--G-G").unwrap()).unwrap();
//! println!("{} candidates left", solver.candidates().len());
//! ```

// Core domain types
pub mod core;

// Load-time errors
pub mod error;

// Precomputed outcome table
pub mod table;

// Elimination and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
