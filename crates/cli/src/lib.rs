//! Command-line front end for the user account schemas.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, SchemaKind, ValidateArgs};
