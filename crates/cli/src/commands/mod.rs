//! Commands module - CLI command implementations.

pub mod policy;
pub mod validate;

use std::process::ExitCode;

use serde_json::Value;

use common::{AppError, AppResult, SchemaConfig};

use crate::args::Commands;

/// Exit status for a rejected document
pub const EXIT_INVALID: u8 = 2;

/// Exit status for any other failure
pub const EXIT_FAILURE: u8 = 1;

/// Dispatch a parsed command
pub fn run(command: Commands, config: &SchemaConfig) -> AppResult<Value> {
    let password_policy = config.password_policy()?;
    match command {
        Commands::Validate(args) => validate::execute(args, &password_policy),
        Commands::Policy => policy::execute(&password_policy),
    }
}

/// Raw exit status for a failed command
pub fn exit_status(err: &AppError) -> u8 {
    match err {
        AppError::Validation(_) => EXIT_INVALID,
        _ => EXIT_FAILURE,
    }
}

pub fn exit_code(err: &AppError) -> ExitCode {
    ExitCode::from(exit_status(err))
}
