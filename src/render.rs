//! Text rendering for boards, statistics and reports

use std::fmt::Write;

use queens_engine::constants::BOARD_SIZE;
use queens_engine::search::IterativeDeepeningReport;
use queens_engine::{SearchOutcome, SearchReport, SearchStats, State};

const QUEEN: &str = "Q ";
const EMPTY: &str = ". ";

/// One line per grid row; a cell holds a queen when its column's queen sits on that row
pub fn render_board(state: &State) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (2 * BOARD_SIZE + 1));
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = if state.row(col) as usize == row { QUEEN } else { EMPTY };
            out.push_str(cell);
        }
        out.push('\n');
    }
    out
}

pub fn render_statistics(stats: &SearchStats) -> String {
    format!(
        "Statistics:\nSteps: {}\nDead ends: {}\nGenerated states: {}\nMax memory usage (unique states): {}\n",
        stats.steps, stats.dead_ends, stats.generated_states, stats.peak_memory
    )
}

/// `Initial State: 0, 0, ...`
pub fn render_initial_state(state: &State) -> String {
    let rows: Vec<String> = state.queens().map(|(_, row)| row.to_string()).collect();
    format!("Initial State: {}", rows.join(", "))
}

/// Full text report for one strategy run
pub fn render_report(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", report.strategy());

    if let SearchReport::IterativeDeepening(ids) = report {
        render_passes(&mut out, ids);
    }

    match report.outcome() {
        SearchOutcome::Solved(state) => {
            let _ = writeln!(out, "Solution Found!");
            out.push_str(&render_board(state));
        }
        SearchOutcome::Exhausted => {
            let _ = writeln!(out, "Solution not found!");
        }
    }

    out.push('\n');
    out.push_str(&render_statistics(report.stats()));
    out
}

fn render_passes(out: &mut String, report: &IterativeDeepeningReport) {
    for pass in &report.passes {
        let verdict = if pass.solved { "found" } else { "not found" };
        let _ = writeln!(out, "Solution {} on depth {}", verdict, pass.depth_limit);
    }
}
