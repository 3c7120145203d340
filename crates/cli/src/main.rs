//! user-schema - validates user account payloads from the command line.

use std::process::ExitCode;

use clap::Parser;

use common::{init_tracing, AppError, SchemaConfig};
use schema_cli::{commands, Cli};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = match SchemaConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(commands::EXIT_FAILURE);
        }
    };

    init_tracing(&config, cli.verbose);
    tracing::debug!("Configuration loaded");

    match commands::run(cli.command, &config) {
        Ok(output) => {
            print_json(&output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!("Document rejected: {}", e);
            } else {
                tracing::error!("Command failed: {}", e);
            }
            print_json(&e.to_response());
            commands::exit_code(&e)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("{}", AppError::from(e)),
    }
}
