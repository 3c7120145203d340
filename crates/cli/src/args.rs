//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Validate user account payloads against their schemas
#[derive(Parser, Debug)]
#[command(name = "user-schema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a JSON document against a schema
    Validate(ValidateArgs),

    /// Print the active password policy
    Policy,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Schema to validate against
    #[arg(value_enum)]
    pub schema: SchemaKind,

    /// JSON file to read (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Schemas that can be validated
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// User registration
    Create,
    /// Login
    Login,
    /// Partial profile update
    Update,
    /// Password change
    PasswordUpdate,
    /// User response record (structure only)
    Response,
}
