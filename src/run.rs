//! Run orchestration: resolve the start, run each strategy, format the report

use queens_engine::{solve, SearchConfig, SearchReport, State, Strategy};
use serde::Serialize;
use tracing::info;
use web_time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::render::{render_initial_state, render_report};

/// One strategy's report plus its wall time
#[derive(Debug, Clone, Serialize)]
pub struct TimedReport {
    pub elapsed_ms: f64,
    pub report: SearchReport,
}

/// Everything produced by one invocation
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub initial_state: State,
    pub runs: Vec<TimedReport>,
}

/// Run every strategy from the same start
pub fn run_strategies(start: State, strategies: &[Strategy], config: &SearchConfig) -> RunReport {
    let runs = strategies
        .iter()
        .map(|&strategy| {
            let started = Instant::now();
            let report = solve(strategy, start, config);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            info!(
                "[RUN] {} finished | Solved={} | Steps={} | Time={:.2}ms",
                strategy,
                report.outcome().is_solved(),
                report.stats().steps,
                elapsed_ms
            );
            TimedReport { elapsed_ms, report }
        })
        .collect();

    RunReport {
        initial_state: start,
        runs,
    }
}

/// Text form: the initial state, then one section per strategy
pub fn render_run(run: &RunReport) -> String {
    let mut out = render_initial_state(&run.initial_state);
    out.push('\n');
    for timed in &run.runs {
        out.push('\n');
        out.push_str(&render_report(&timed.report));
    }
    out
}

/// Execute the command line and return what should be printed to stdout
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let start = cli.start_state()?;
    info!("[RUN] Start state {}", start);

    let run = run_strategies(start, &cli.strategies(), &cli.search_config());

    match cli.format {
        OutputFormat::Text => Ok(render_run(&run)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&run)?),
    }
}
