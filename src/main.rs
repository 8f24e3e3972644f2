use clap::Parser;
use tracing_subscriber::EnvFilter;

use queens::cli::Cli;
use queens::run::execute;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = execute(&cli)?;
    println!("{output}");

    Ok(())
}
