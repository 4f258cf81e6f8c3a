//! Gridle Solver - CLI
//!
//! Solves gridle boards read from text files and plans the swaps that
//! unscramble them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use gridle_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, generate_puzzle, plan_swaps, random_seed, run_benchmark,
        solve_board,
    },
    core::{Board, ScreenLayout, Word},
    output::{print_benchmark_result, print_puzzle, print_solve_result, print_swap_plan},
    puzzle::GeneratorConfig,
    swaps::{DEFAULT_MAX_BIJECTIONS, PlannerConfig},
    wordlists::{
        CORPUS_EN,
        loader::{load_from_file, words_from_slice},
    },
};
use log::{LevelFilter, debug};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "gridle",
    about = "Gridle solver: constraint propagation over crossing words plus minimum-swap planning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Give up planning after this many candidate tile assignments
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_BIJECTIONS)]
    max_bijections: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board file and plan the swaps
    Solve {
        /// Board file: five lines of `<letters> <feedback>`
        board: PathBuf,

        /// Only solve, do not plan swaps
        #[arg(long)]
        no_swaps: bool,

        /// Screen layout `X,Y,PITCH` to print swipe coordinates
        #[arg(long, value_parser = parse_layout)]
        layout: Option<ScreenLayout>,
    },

    /// Plan swaps between two tile sequences
    Swaps {
        /// Current tiles in canonical order
        original: String,

        /// Target tiles in canonical order
        target: String,
    },

    /// Generate a random scrambled puzzle
    Generate {
        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of random tile swaps to scramble with
        #[arg(long, default_value = "10")]
        scramble: usize,
    },

    /// Benchmark the solver on generated puzzles
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of random tile swaps to scramble with
        #[arg(long, default_value = "10")]
        scramble: usize,
    },
}

fn parse_layout(text: &str) -> Result<ScreenLayout, String> {
    let parts: Vec<u32> = text
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid layout {text:?}: {e}"))?;
    match parts[..] {
        [x, y, pitch] => Ok(ScreenLayout::new((x, y), pitch)),
        _ => Err(format!("layout must be X,Y,PITCH, got {text:?}")),
    }
}

/// Load the corpus based on the -w flag
fn load_corpus(wordlist: &str) -> Result<Vec<Word>> {
    let corpus = match wordlist {
        "embedded" => words_from_slice(CORPUS_EN),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };
    if corpus.is_empty() {
        bail!("wordlist {wordlist} contains no five-letter words");
    }
    debug!("loaded {} corpus words", corpus.len());
    Ok(corpus)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let planner = PlannerConfig {
        max_bijections: cli.max_bijections,
    };

    match cli.command {
        Commands::Solve {
            board,
            no_swaps,
            layout,
        } => {
            let corpus = load_corpus(&cli.wordlist)?;
            let config = SolveConfig {
                plan_swaps: !no_swaps,
                planner,
            };
            run_solve_command(&board, &corpus, config, layout.as_ref(), cli.verbose > 0)
        }
        Commands::Swaps { original, target } => {
            let plan = plan_swaps(&original, &target, planner)?;
            print_swap_plan(&plan, None);
            Ok(())
        }
        Commands::Generate { seed, scramble } => {
            let corpus = load_corpus(&cli.wordlist)?;
            let seed = seed.unwrap_or_else(random_seed);
            let config = GeneratorConfig {
                scramble_swaps: scramble,
                ..GeneratorConfig::default()
            };
            let puzzle = generate_puzzle(&corpus, config, seed)
                .context("no valid grid found in the wordlist")?;
            print_puzzle(&puzzle, seed);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            scramble,
        } => {
            let corpus = load_corpus(&cli.wordlist)?;
            println!("Running benchmark on {count} generated puzzles (seed {seed})...");
            let config = BenchmarkConfig {
                puzzles: count,
                seed,
                generator: GeneratorConfig {
                    scramble_swaps: scramble,
                    ..GeneratorConfig::default()
                },
                solve: SolveConfig {
                    plan_swaps: true,
                    planner,
                },
                show_progress: true,
            };
            let result = run_benchmark(&corpus, &config);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    path: &Path,
    corpus: &[Word],
    config: SolveConfig,
    layout: Option<&ScreenLayout>,
    verbose: bool,
) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("invalid board file {}", path.display()))?;

    let result = solve_board(&board, corpus, config)?;
    print_solve_result(&result, layout, verbose);

    if !result.is_solved() {
        bail!("could not solve the board");
    }
    Ok(())
}
