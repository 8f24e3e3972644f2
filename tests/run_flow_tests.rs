//! Run Flow Integration Tests
//!
//! Tests for full invocations including:
//! - Command-line parsing into a start state
//! - Text report layout for each strategy
//! - JSON report shape

use clap::Parser;
use queens::cli::Cli;
use queens::run::{execute, run_strategies};
use queens_engine::{SearchConfig, State, Strategy};

/// One queen away from the solution 0,4,7,5,2,6,1,3
const NEAR_GOAL: &str = "1,4,7,5,2,6,1,3";

fn run_cli(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("Arguments should parse");
    execute(&cli).expect("Run should succeed")
}

// ============================================================================
// Text Output Tests
// ============================================================================

#[test]
fn test_text_output_best_first() {
    //! Best-first from all zeros prints the start, a board and the statistics block

    let out = run_cli(&["queens", "--strategy", "best-first", "--start", "0,0,0,0,0,0,0,0"]);

    assert!(out.starts_with("Initial State: 0, 0, 0, 0, 0, 0, 0, 0\n"));
    assert!(out.contains("== Best-first search ==\n"));
    assert!(out.contains("Solution Found!\n"));
    assert!(out.contains("Statistics:\n"));
    assert_eq!(out.matches('Q').count(), 8, "Exactly one board should be printed");
    assert!(!out.contains("on depth"), "Best-first has no depth passes");
}

#[test]
fn test_text_output_both_strategies_in_order() {
    //! The default strategy runs best-first first, then iterative deepening

    let out = run_cli(&["queens", "--start", NEAR_GOAL]);

    let best_first = out.find("== Best-first search ==").expect("Best-first section");
    let ids = out.find("== Iterative deepening search ==").expect("IDS section");
    assert!(best_first < ids);

    assert!(out.contains("Solution not found on depth 0\n"));
    assert!(out.contains("Solution found on depth 1\n"));
    assert_eq!(out.matches("Solution Found!").count(), 2);
    assert_eq!(out.matches("Statistics:").count(), 2);
}

#[test]
fn test_text_output_exhausted_iterative_deepening() {
    //! A shallow maximum depth prints every failed pass and no board

    let out = run_cli(&[
        "queens",
        "--strategy",
        "iterative-deepening",
        "--max-depth",
        "1",
        "--start",
        "0,0,0,0,0,0,0,0",
    ]);

    assert!(out.contains("Solution not found on depth 0\n"));
    assert!(out.contains("Solution not found on depth 1\n"));
    assert!(out.contains("Solution not found!\n"));
    assert!(!out.contains("Solution Found!"));
}

#[test]
fn test_seeded_runs_repeat() {
    //! The same seed produces the same start and the same statistics

    let args = ["queens", "--strategy", "best-first", "--seed", "12345"];
    assert_eq!(run_cli(&args), run_cli(&args));
}

#[test]
fn test_invalid_start_is_an_error() {
    //! A malformed start surfaces as an error rather than a panic

    for bad in ["0,0,0", "0,0,0,0,0,0,0,8", "a,b,c,d,e,f,g,h"] {
        let cli = Cli::try_parse_from(["queens", "--start", bad]).expect("Parses as a string");
        assert!(execute(&cli).is_err(), "{bad} should be rejected");
    }
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_shape() {
    //! JSON carries the start plus one tagged run per strategy

    let out = run_cli(&["queens", "--format", "json", "--start", NEAR_GOAL]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("Valid JSON");

    assert_eq!(value["initial_state"], serde_json::json!([1, 4, 7, 5, 2, 6, 1, 3]));

    let runs = value["runs"].as_array().expect("runs array");
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["report"]["strategy"], "best-first");
    assert_eq!(runs[1]["report"]["strategy"], "iterative-deepening");

    for run in runs {
        assert_eq!(run["report"]["outcome"]["outcome"], "solved");
        assert!(run["elapsed_ms"].as_f64().expect("elapsed_ms") >= 0.0);
        assert!(run["report"]["stats"]["steps"].as_u64().expect("steps") >= 1);
    }
}

// ============================================================================
// Orchestration Tests
// ============================================================================

#[test]
fn test_run_strategies_shares_start() {
    //! Every run in a report starts from the same state

    let start = State::new([0, 4, 7, 5, 2, 6, 1, 3]);
    let run = run_strategies(start, &Strategy::ALL, &SearchConfig::default());

    assert_eq!(run.initial_state, start);
    assert_eq!(run.runs.len(), 2);
    for timed in &run.runs {
        assert_eq!(timed.report.outcome().solution(), Some(&start));
    }
}
