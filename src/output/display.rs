//! Display functions for command results

use super::formatters::{create_progress_bar, tiles_to_emoji};
use crate::commands::{BenchmarkResult, RankResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            turn.word.to_uppercase(),
            tiles_to_emoji(&turn.tiles)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of ranking a word
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD RANKING:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against a lexicon of {} words:", result.lexicon_size);
    println!("   Positional score:   {}", result.positional_score);
    println!("   Commonality factor: {:.2}", result.commonality_factor);
    println!(
        "   Combined score:     {}",
        format!("{:.1}", result.combined_score).bright_yellow()
    );
    println!("   Letter weights:     {:.2}", result.letter_weight_score);
    println!(
        "   Rank:               {} of {}",
        result.rank.to_string().bright_yellow().bold(),
        result.lexicon_size
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        (result.solved as f64 / result.total_words as f64) * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_shown = result.max_guesses.max(6);
    for guess_count in 1..=max_shown {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
