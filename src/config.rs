//! Configuration management and validation.
//!
//! Provides the runtime settings for the validator CLI. Settings are layered:
//! built-in defaults, then `ADSTXT_*` environment variables, then command-line
//! overrides applied by the CLI.

use crate::constants::{DEFAULT_MAX_ERRORS_SHOWN, DEFAULT_TOP_PARTNERS, default_workers};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Environment variable overriding the worker count
pub const ENV_WORKERS: &str = "ADSTXT_WORKERS";
/// Environment variable overriding the partner ranking length
pub const ENV_TOP_PARTNERS: &str = "ADSTXT_TOP_PARTNERS";
/// Environment variable overriding the number of errors printed
pub const ENV_MAX_ERRORS: &str = "ADSTXT_MAX_ERRORS";
/// Environment variable enabling strict mode
pub const ENV_STRICT: &str = "ADSTXT_STRICT";

/// Global configuration for ads.txt validation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Maximum number of sources read concurrently
    pub workers: usize,

    /// Number of partners shown in the top-partner ranking
    pub top_partners: usize,

    /// Maximum number of syntax errors printed per source in human output
    pub max_errors_shown: usize,

    /// Treat any syntax error as a failed run
    pub strict: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            top_partners: DEFAULT_TOP_PARTNERS,
            max_errors_shown: DEFAULT_MAX_ERRORS_SHOWN,
            strict: false,
        }
    }
}

impl ValidatorConfig {
    /// Defaults overlaid with `ADSTXT_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_WORKERS) {
            self.workers = parse_env_value(ENV_WORKERS, &value)?;
        }
        if let Some(value) = lookup(ENV_TOP_PARTNERS) {
            self.top_partners = parse_env_value(ENV_TOP_PARTNERS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_ERRORS) {
            self.max_errors_shown = parse_env_value(ENV_MAX_ERRORS, &value)?;
        }
        if let Some(value) = lookup(ENV_STRICT) {
            self.strict = parse_bool(ENV_STRICT, &value)?;
        }

        debug!("Configuration after environment overrides: {:?}", self);
        Ok(())
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the partner ranking length
    pub fn with_top_partners(mut self, top_partners: usize) -> Self {
        self.top_partners = top_partners;
        self
    }

    /// Set the number of syntax errors printed per source
    pub fn with_max_errors_shown(mut self, max_errors_shown: usize) -> Self {
        self.max_errors_shown = max_errors_shown;
        self
    }

    /// Enable strict mode
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration("workers must be at least 1"));
        }
        Ok(())
    }
}

fn parse_env_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        Error::configuration(format!("Invalid value '{}' for {}", value, key))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::configuration(format!(
            "Invalid boolean '{}' for {}",
            value, key
        ))),
    }
}
