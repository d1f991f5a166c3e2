//! Decision Lens command-line entry point.
//!
//! Reads a decision problem from the arguments (joined by spaces) or, when
//! none are given, from stdin, and prints the rendered analysis to stdout.
//! Logs go to stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use decision_lens::adapters::tools::{AnalyzeDecisionParams, AnalyzeDecisionTool};
use decision_lens::application::AnalyzeDecisionHandler;
use decision_lens::config::{AppConfig, ConfigError, LoggingConfig};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read problem from stdin: {0}")]
    Input(#[from] io::Error),

    #[error("{0}")]
    Tool(String),
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level)
        .unwrap_or_else(|_| EnvFilter::new("decision_lens=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_problem() -> Result<String, CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn run(config: &AppConfig) -> Result<String, CliError> {
    let problem = read_problem()?;

    let tool = AnalyzeDecisionTool::new(
        AnalyzeDecisionHandler::new(config.analysis.limits()),
        config.output.format,
    );
    let response = tool.run(AnalyzeDecisionParams {
        problem,
        format: None,
    });

    if response.is_error() {
        return Err(CliError::Tool(response.content));
    }
    Ok(response.content)
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);
    info!(format = %config.output.format, "Starting decision analysis");

    match run(&config) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Analysis failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
