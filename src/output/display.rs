//! Display functions for command results

use super::formatters::{box_grid, create_progress_bar, describe_swap, feedback_rows};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Board, Feedback, ScreenLayout};
use crate::puzzle::{Puzzle, grid_words};
use crate::solver::Solution;
use crate::swaps::SwapPlan;
use colored::Colorize;

/// Print a board with each tile in its feedback color
pub fn print_board(board: &Board) {
    let grid = box_grid(|row, col| {
        board.cell(row, col).map(|cell| {
            let text = format!(" {} ", (cell.letter as char).to_ascii_uppercase());
            match cell.feedback {
                Feedback::Green => text.green().bold().to_string(),
                Feedback::Yellow => text.yellow().bold().to_string(),
                Feedback::Gray => text.bright_black().bold().to_string(),
            }
        })
    });
    print!("{grid}");
}

/// Print a solution, unknown cells as `?`
pub fn print_solution(solution: &Solution) {
    let grid = box_grid(|row, col| {
        crate::core::geometry::is_active(row, col).then(|| match solution.get(row, col) {
            Some(letter) => format!(" {} ", (letter as char).to_ascii_uppercase())
                .green()
                .to_string(),
            None => " ? ".red().to_string(),
        })
    });
    print!("{grid}");
}

/// Print a swap plan, one swap per line
pub fn print_swap_plan(plan: &SwapPlan, layout: Option<&ScreenLayout>) {
    println!(
        "\n🔀 {} ({} assignments explored)",
        format!("{} swaps", plan.len()).bright_yellow().bold(),
        plan.bijections_explored
    );
    for (i, swap) in plan.swaps.iter().enumerate() {
        println!("  {:2}. {}", i + 1, describe_swap(*swap, layout));
    }
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, layout: Option<&ScreenLayout>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Board".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    print_board(&result.board);

    if verbose {
        for row in feedback_rows(&result.board) {
            println!("  {row}");
        }
        println!();
        for commit in &result.outcome.commits {
            println!(
                "  pass {}: {:<9} {}",
                commit.pass,
                commit.axis.to_string(),
                commit.word.to_uppercase().bright_yellow()
            );
        }
        println!("  {} passes", result.outcome.passes);
    }

    println!("\n{}", "Solution".bright_cyan().bold());
    print_solution(&result.outcome.solution);

    if result.is_solved() {
        println!("{}", "✅ Solved".green().bold());
    } else {
        println!("{}", "❌ Could not solve".red().bold());
        for (axis, remaining) in result.outcome.unresolved() {
            println!("   {axis}: {remaining} candidates left");
        }
    }

    if let Some(plan) = &result.plan {
        print_swap_plan(plan, layout);
    }
}

/// Print a generated puzzle and its answer words
pub fn print_puzzle(puzzle: &Puzzle, seed: u64) {
    println!("\n🎲 Puzzle (seed {})", seed.to_string().bright_yellow());
    print_board(&puzzle.board);
    println!("\n# board file");
    print!("{}", puzzle.board);
    println!(
        "\nAnswer: {}",
        grid_words(&puzzle.solution).join(" ").bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Puzzles:          {} of {} generated",
        result.generated, result.requested
    );
    println!(
        "   Solved:           {}",
        format!("{} ({:.1}%)", result.solved, result.solve_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    if result.alternate_solutions > 0 {
        println!("   Alternate grids:  {}", result.alternate_solutions);
    }
    println!("   Partial:          {}", format!("{}", result.partial).yellow());
    println!("   Infeasible:       {}", format!("{}", result.infeasible).red());
    if result.planning_failed > 0 {
        println!("   Planning failed:  {}", result.planning_failed);
    }
    println!("   Average swaps:    {:.2}", result.average_swaps);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.solved == 0 {
        return;
    }
    println!("\n📈 {}", "Swap distribution:".bright_cyan().bold());
    for swaps in 0..=result.max_swaps {
        if let Some(&count) = result.swap_distribution.get(&swaps) {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {swaps:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
