use ohctl::cli::Cli;
use ohctl::error::OhctlError;
use ohctl::logger::{initialize as LoggerInitialize, level_for};
use ohctl::run::{debug_enabled, execute, load_config, render};

use openhab_client::config::ClientConfig;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config decides the log level, so its errors go straight to stderr.
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.message());
            return ExitCode::FAILURE;
        }
    };

    let level = level_for(debug_enabled(&cli, &config));
    if let Err(e) = LoggerInitialize(level, cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli, &config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &ClientConfig) -> Result<String, OhctlError> {
    let rows = execute(cli, config).await?;
    render(rows)
}
