//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, describe_path, format_word_set};
use crate::commands::{BenchmarkResult, RoundReport, TraceResult};
use crate::core::{Grid, Path};
use crate::round::{PlayerId, PlayerResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the board, optionally highlighting a path
pub fn print_board(grid: &Grid, highlight: Option<&Path>) {
    let width = grid.dim() * 4 + 2;
    println!("┌{}┐", "─".repeat(width));
    for line in board_lines(grid, highlight) {
        println!("│ {line} │");
    }
    println!("└{}┘", "─".repeat(width));
}

/// Print the result of tracing a word
pub fn print_trace_result(result: &TraceResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Tracing: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    print_board(&result.grid, result.path.as_ref());

    match &result.path {
        Some(path) => {
            println!("\n✅ {}", "On the board".green().bold());
            println!("   Path:        {}", describe_path(&result.grid, path));
        }
        None => println!("\n❌ {}", "Not on the board".red().bold()),
    }

    if result.in_dictionary {
        println!("   Dictionary:  {}", "known word".green());
    } else {
        println!("   Dictionary:  {}", "unknown word".yellow());
    }

    if result.would_score() {
        println!(
            "   Worth:       {} if nobody else finds it",
            format!("{} point(s)", result.points).bright_yellow().bold()
        );
    }
}

/// Print every player's categories for a round
pub fn print_round_results(results: &[PlayerResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROUND RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!(
            "\n👤 {}  {}",
            result.player().to_string().bright_white().bold(),
            format!("+{}", result.score()).bright_yellow().bold()
        );
        println!("   Scored:            {}", format_word_set(result.scored()).green());
        println!("   Others got:        {}", format_word_set(result.others_got()));
        println!(
            "   Not on board:      {}",
            format_word_set(result.not_on_board()).red()
        );
        println!(
            "   Not in dictionary: {}",
            format_word_set(result.not_in_dictionary()).yellow()
        );
    }
}

/// Print a resolved round with its board
pub fn print_round_report(report: &RoundReport) {
    print_board(&report.grid, None);
    print_round_results(&report.results);
}

/// Print cumulative scores, highest first
pub fn print_scores(scores: &BTreeMap<PlayerId, u32>) {
    let mut ranked: Vec<(&PlayerId, &u32)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    for (rank, (player, score)) in ranked.iter().enumerate() {
        println!("   {}. {:<16} {score:>4}", rank + 1, player.as_str());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards rolled:    {}", result.boards);
    println!("   Searches:         {}", result.searches);
    println!(
        "   Paths found:      {} ({})",
        result.found,
        format!("{:.1}%", result.hit_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Best board:       {}", format!("{}", result.most_found).green());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.0}", result.searches_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Found by length:".bright_cyan().bold());
    for (&len, &count) in &result.found_by_length {
        let pct = count as f64 / result.found as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:>2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
