//! Simple interactive CLI mode
//!
//! Line-based session: shows the best guesses, then reads the guess you
//! played and the outcome the game gave you.

use crate::core::{Outcome, Word};
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(solver: &mut Solver, top_n: usize) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(solver, top_n, &mut stdin.lock(), &mut stdout).map_err(|e| e.to_string())
}

/// Run the interactive session on arbitrary input and output
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<R: BufRead, W: Write>(
    solver: &mut Solver,
    top_n: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║          Wordle Information - Interactive Mode               ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guesses are ranked by expected information (bits).")?;
    writeln!(output, "Enter the word you played (blank = top suggestion), then its outcome:\n")?;
    writeln!(output, "  - Use G/g/2/🟩 for exact (correct position)")?;
    writeln!(output, "  - Use Y/y/1/🟨 for present (wrong position)")?;
    writeln!(output, "  - Use -/_/0/⬜ for absent")?;
    writeln!(output, "  - Or type 'win' if you got it right!\n")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    loop {
        let turn = solver.history().len() + 1;
        let candidates = solver.candidate_words();

        if candidates.is_empty() {
            writeln!(output, "\n❌ No candidates remain! An outcome may have been entered wrong.")?;
            writeln!(output, "Type 'undo' to go back, or 'new' to start over.\n")?;
        } else {
            writeln!(output, "────────────────────────────────────────────────────────────")?;
            writeln!(output, "Turn {turn}: {} candidates remaining", candidates.len())?;
            writeln!(output, "────────────────────────────────────────────────────────────")?;

            writeln!(output, "\n📊 Suggested guesses:")?;
            for (i, entry) in solver.top_recommendations(top_n).iter().enumerate() {
                writeln!(
                    output,
                    "   {:>2}. {}  {:.3} bits",
                    i + 1,
                    entry.word.as_str().bright_white().bold(),
                    entry.bits
                )?;
            }
            writeln!(output)?;

            if candidates.len() <= 10 {
                writeln!(output, "Remaining candidates:")?;
                for candidate in &candidates {
                    writeln!(output, "  • {candidate}")?;
                }
                writeln!(output)?;
            }
        }

        let Some(command) = prompt(input, output, "Guess (or command)")? else {
            return Ok(());
        };

        let guess = match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                solver.reset();
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            "undo" | "u" => {
                if let Some((word, outcome)) = solver.undo() {
                    writeln!(output, "✓ Undone {word} {}\n", outcome.to_emoji())?;
                } else {
                    writeln!(output, "Nothing to undo!\n")?;
                }
                continue;
            }
            "" => match solver.top_recommendations(1).first() {
                Some(entry) => entry.word,
                None => continue,
            },
            text => match Word::new(text) {
                Ok(word) if solver.table().guess_id(&word).is_some() => word,
                Ok(word) => {
                    writeln!(output, "❌ '{word}' is not in the guess list\n")?;
                    continue;
                }
                Err(e) => {
                    writeln!(output, "❌ {e}\n")?;
                    continue;
                }
            },
        };

        let outcome = loop {
            let Some(text) = prompt(input, output, &format!("Outcome for {guess} (G/Y/- or 'win')"))?
            else {
                return Ok(());
            };
            match text.to_lowercase().as_str() {
                "win" | "correct" | "yes" | "solved" => break Outcome::ALL_EXACT,
                _ => match Outcome::parse(&text) {
                    Ok(outcome) => break outcome,
                    Err(e) => writeln!(output, "❌ {e}. Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n")?,
                },
            }
        };

        if let Err(e) = solver.observe_guess(&guess, outcome) {
            writeln!(output, "❌ {e}\n")?;
            continue;
        }

        if outcome.is_all_exact() {
            writeln!(output, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                output,
                "{}",
                "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            )?;
            writeln!(output, "{}", "═".repeat(70).bright_cyan())?;

            let guesses = solver.history().len();
            writeln!(
                output,
                "\n  Solution found in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
            writeln!(output, "\n  Guess history:")?;
            for (i, (word, result)) in solver.history().iter().enumerate() {
                writeln!(
                    output,
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    word.as_str().bright_white().bold(),
                    result.to_emoji()
                )?;
            }
            writeln!(output, "\n{}\n", "═".repeat(70).bright_cyan())?;

            match prompt(input, output, "Play again? (yes/no)")?
                .map(|answer| answer.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y") => {
                    solver.reset();
                    writeln!(output, "\n🔄 New game started!\n")?;
                }
                _ => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
