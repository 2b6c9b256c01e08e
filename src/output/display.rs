//! Display functions for command results

use super::formatters::{distribution_bar, feedback_marks};
use crate::commands::{BenchmarkReport, SolveReport};
use colored::Colorize;

/// Print the result of solving one target
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   strategy: {}",
        report.target.to_uppercase().bright_yellow().bold(),
        report.strategy.to_string().bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, step) in report.steps.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                format!("{:3}.", i + 1).bright_black(),
                step.word.to_uppercase().bright_white().bold(),
                feedback_marks(step.feedback, step.word.len()).cyan(),
                step.feedback
            );
        }
    }

    println!();
    if report.solved() {
        println!(
            "{}",
            format!(
                "Solved in {} attempts ({:.2}s)",
                report.outcome,
                report.duration.as_secs_f64()
            )
            .green()
            .bold()
        );
    } else {
        let reason = report.failure.as_deref().unwrap_or("unknown");
        println!(
            "{}",
            format!("Failed after {} attempts: {reason}", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print aggregated benchmark statistics
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK".bright_cyan().bold(),
        report.strategy.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for per_length in &report.lengths {
        println!(
            "\n{} {}",
            "Word length".bright_cyan().bold(),
            per_length.length
        );
        println!("   Words tested:     {}", per_length.words_tested);
        println!(
            "   Solved:           {}",
            format!("{}", per_length.solved).green()
        );
        if per_length.failed > 0 {
            println!(
                "   Failed:           {}",
                format!("{}", per_length.failed).red()
            );
        }
        println!(
            "   Mean attempts:    {}",
            format!("{:.2}", per_length.mean_attempts)
                .bright_yellow()
                .bold()
        );
        println!(
            "   Best / worst:     {} / {}",
            format!("{}", per_length.min_attempts).green(),
            format!("{}", per_length.max_attempts).yellow()
        );
        println!(
            "   Mean time/word:   {:.1}ms",
            per_length.mean_duration.as_secs_f64() * 1000.0
        );

        if per_length.solved > 0 {
            println!("   Distribution:");
            let max = per_length.distribution.values().max().copied().unwrap_or(1);
            let mut counts: Vec<(usize, usize)> = per_length
                .distribution
                .iter()
                .map(|(&attempts, &count)| (attempts, count))
                .collect();
            counts.sort_unstable();
            for (attempts, count) in counts {
                let pct = count as f64 / per_length.solved as f64 * 100.0;
                let bar = distribution_bar(count, max, 30);
                println!(
                    "   {attempts:4}: {} {count:4} ({pct:5.1}%)",
                    bar.green()
                );
            }
        }
    }

    println!(
        "\n   Total time:       {:.2}s",
        report.total_time.as_secs_f64()
    );
}
