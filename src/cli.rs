//! Command-line configuration
//!
//! Parsed with `clap` derive. The start state comes from, in order of preference:
//! 1. `--start 0,1,2,...` (explicit placement)
//! 2. `--seed <u64>` (reproducible random placement)
//! 3. the thread RNG

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use queens_engine::constants::DEFAULT_MAX_DEPTH;
use queens_engine::{seed_initial_state, SearchConfig, State, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Solve the eight queens puzzle from a random or given start
#[derive(Debug, Clone, Parser)]
#[command(name = "queens", version, about)]
pub struct Cli {
    /// Search strategy to run
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Both)]
    pub strategy: StrategyArg,

    /// Deepest pass for iterative deepening
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Seed for the random start state
    #[arg(long, conflicts_with = "start")]
    pub seed: Option<u64>,

    /// Explicit start state, e.g. 0,0,0,0,0,0,0,0
    #[arg(long)]
    pub start: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Strategy selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    BestFirst,
    IterativeDeepening,
    /// Run both from the same start
    Both,
}

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Strategies to run, in order
    pub fn strategies(&self) -> Vec<Strategy> {
        match self.strategy {
            StrategyArg::BestFirst => vec![Strategy::BestFirst],
            StrategyArg::IterativeDeepening => vec![Strategy::IterativeDeepening],
            StrategyArg::Both => Strategy::ALL.to_vec(),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
        }
    }

    /// Resolve the start state from `--start`, `--seed` or the thread RNG
    pub fn start_state(&self) -> anyhow::Result<State> {
        if let Some(text) = &self.start {
            return text
                .parse::<State>()
                .with_context(|| format!("invalid --start value {text:?}"));
        }

        Ok(match self.seed {
            Some(seed) => seed_initial_state(&mut StdRng::seed_from_u64(seed)),
            None => seed_initial_state(&mut rand::rng()),
        })
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["queens"]).unwrap();

        assert_eq!(cli.strategy, StrategyArg::Both);
        assert_eq!(cli.max_depth, 8);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.strategies(), Strategy::ALL.to_vec());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_start_overrides_random() {
        let cli = Cli::try_parse_from(["queens", "--start", "0,0,0,0,0,0,0,0"]).unwrap();
        assert_eq!(cli.start_state().unwrap(), State::new([0; 8]));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let cli = Cli::try_parse_from(["queens", "--seed", "99"]).unwrap();
        assert_eq!(cli.start_state().unwrap(), cli.start_state().unwrap());
    }

    #[test]
    fn test_seed_and_start_conflict() {
        let result = Cli::try_parse_from(["queens", "--seed", "1", "--start", "0,0,0,0,0,0,0,0"]);
        assert!(result.is_err(), "--seed and --start are mutually exclusive");
    }

    #[test]
    fn test_bad_start_reports_context() {
        let cli = Cli::try_parse_from(["queens", "--start", "1,2,3"]).unwrap();
        let err = cli.start_state().unwrap_err();
        assert!(format!("{err:#}").contains("invalid --start value"));
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["queens", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");
    }
}
