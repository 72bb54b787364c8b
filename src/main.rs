use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use streetgraph::{AppConfig, OutputFormat, Repl};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "streetgraph")]
#[command(about = "Build street intersection graphs from line commands on stdin")]
#[command(version)]
struct Cli {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format for `g`, overrides the config file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Search intersections on all cores
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn app_config(&self) -> Result<AppConfig, streetgraph::AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.parallel {
            config.builder.parallel = true;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    // stdout carries the graphs, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.app_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "starting");

    let mut repl = Repl::new(config);
    let stdin = io::stdin();
    let result = repl.run(stdin.lock(), &mut io::stdout().lock(), &mut io::stderr().lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
