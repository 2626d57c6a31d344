//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, GenerateSummary, SolveResult};
use crate::solver::ScoredWord;
use colored::Colorize;

/// Print ranked recommendations
pub fn print_ranking(title: &str, entries: &[ScoredWord], candidates: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n📊 Against {candidates} possible answers:\n");

    for (i, entry) in entries.iter().enumerate() {
        let line = format!(
            "   {:>3}. {}  [{}] {:.3} bits",
            i + 1,
            entry.word,
            entropy_bar(entry.bits, 20),
            entry.bits
        );
        if i == 0 {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{line}");
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {turn}: {} {}", step.word, step.outcome.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Expected:   {:.3} bits", step.bits);
            println!("  Remaining:  {:.1} candidates expected", step.expected_remaining);

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Observed:   {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.as_str().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} distinct outcomes)",
        result.max_bucket, result.buckets
    );
    match result.rank {
        Some(rank) => println!("   Rank:        #{rank}"),
        None => println!("   Rank:        unranked"),
    }
}

/// Print what `generate` wrote
pub fn print_generate_summary(summary: &GenerateSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OUTCOME TABLE GENERATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Guess words:  {}", summary.guesses);
    println!("   Answer words: {}", summary.answers);
    println!("   Table:        {}", summary.table_path.display());
    if let Some(path) = &summary.opening_path {
        println!("   Opening:      {}", path.display());
    }
    if let Some((word, bits)) = summary.best_opening {
        println!(
            "   Best opener:  {} ({bits:.3} bits)",
            word.as_str().bright_green().bold()
        );
    }
    println!("   Time taken:   {:.2}s", summary.duration.as_secs_f64());
}
