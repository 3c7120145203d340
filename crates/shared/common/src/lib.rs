//! Common utilities shared by the schema crates and tools.
//!
//! This crate provides:
//! - Unified application error with a JSON error body
//! - Configuration loaded from the environment
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, ErrorBody, ErrorResponse};
pub use telemetry::init_tracing;
