//! Word lists for Wordle solving
//!
//! The guess universe and the answer universe are loaded at startup from
//! plain text files.

pub mod loader;

pub use loader::{load_from_file, words_from_lines};
