//! PatternFilter CLI
//!
//! CLI tool for classifying URLs against pattern lists and measuring match latency.

mod bench;
mod check;
mod lists;

use clap::{Parser, Subcommand, ValueEnum};

use pf_core::MatchStrategy;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PatternFilter URL classification tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    Auto,
    Naive,
    Automaton,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => MatchStrategy::Auto,
            StrategyArg::Naive => MatchStrategy::Naive,
            StrategyArg::Automaton => MatchStrategy::Automaton,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Classify URLs against pattern lists
    Check {
        /// Pattern list files, one verbatim pattern per non-empty line
        #[arg(short, long, required = true)]
        patterns: Vec<String>,

        /// URLs to classify
        #[arg(short, long, required = true)]
        url: Vec<String>,

        /// Matching strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Auto)]
        strategy: StrategyArg,

        /// Print one JSON object per URL
        #[arg(long)]
        json: bool,
    },

    /// Measure load time and match latency
    Bench {
        /// Pattern list files, one verbatim pattern per non-empty line
        #[arg(short, long, required = true)]
        patterns: Vec<String>,

        /// Passes over the built-in URL mix
        #[arg(short, long, default_value_t = 10_000)]
        iterations: usize,

        /// Matching strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Auto)]
        strategy: StrategyArg,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            patterns,
            url,
            strategy,
            json,
        } => check::run_check(check::CheckOptions {
            pattern_paths: patterns,
            urls: url,
            strategy: strategy.into(),
            json,
        }),
        Commands::Bench {
            patterns,
            iterations,
            strategy,
        } => bench::run_bench(bench::BenchOptions {
            pattern_paths: patterns,
            iterations,
            strategy: strategy.into(),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
