use clap::Parser;
use log::error;
use std::env;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::filter::EnvFilter;
use xdy::cli::Cli;
use xdy::{Config, Roller, run};

fn main() -> ExitCode {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("xdy=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from(&cli);
    let mut roller = Roller::with_seed(config.seed);

    match run(
        &config,
        &cli.expressions,
        &mut roller,
        io::stdout().lock(),
        io::stderr(),
    ) {
        Ok(report) if report.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
