//! Configuration loaded from environment variables.

use std::env;

use domain::{PasswordPolicy, DEFAULT_SPECIAL_CHARACTERS, MIN_PASSWORD_LENGTH};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Default service name for logging
pub const DEFAULT_SERVICE_NAME: &str = "user-schema";

/// Default log level when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Schema validation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
    /// Minimum password length
    pub password_min_length: usize,
    /// Characters accepted by the special character rule
    pub password_special_characters: String,
    /// Report every failed password sub-rule instead of the first one
    pub password_report_all_violations: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            password_min_length: MIN_PASSWORD_LENGTH,
            password_special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            password_report_all_violations: false,
        }
    }
}

impl SchemaConfig {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// Returns a configuration error for unparsable or out-of-range values.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let password_min_length = match lookup("PASSWORD_MIN_LENGTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::config(format!("PASSWORD_MIN_LENGTH must be a number, got {:?}", raw))
            })?,
            None => defaults.password_min_length,
        };
        if password_min_length == 0 {
            return Err(AppError::config("PASSWORD_MIN_LENGTH must be at least 1"));
        }

        let password_special_characters = lookup("PASSWORD_SPECIAL_CHARACTERS")
            .unwrap_or(defaults.password_special_characters);
        if password_special_characters.is_empty() {
            return Err(AppError::config(
                "PASSWORD_SPECIAL_CHARACTERS must not be empty",
            ));
        }

        let password_report_all_violations = match lookup("PASSWORD_REPORT_ALL_VIOLATIONS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "PASSWORD_REPORT_ALL_VIOLATIONS must be true or false, got {:?}",
                    raw
                ))
            })?,
            None => defaults.password_report_all_violations,
        };

        Ok(Self {
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            password_min_length,
            password_special_characters,
            password_report_all_violations,
        })
    }

    /// Build the password policy described by this configuration.
    pub fn password_policy(&self) -> AppResult<PasswordPolicy> {
        let policy =
            PasswordPolicy::new(self.password_min_length, &*self.password_special_characters)?;
        Ok(policy.with_report_all_violations(self.password_report_all_violations))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
