//! Command-line argument definitions for the ads.txt validator
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::STDIO_MARKER;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for the ads.txt validator
///
/// Validates IAB ads.txt / app-ads.txt files, reports syntax errors line by line,
/// and summarizes the declared advertising partners.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "adstxt-validator",
    version,
    about = "Validate and summarize ads.txt / app-ads.txt files",
    long_about = "Checks ads.txt and app-ads.txt files for basic IAB record syntax, reports \
                  malformed lines with their line numbers, and summarizes the declared \
                  advertising systems by account type. Valid records can be exported as a \
                  cleaned CSV file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate files and print a summary report
    Validate(ValidateArgs),
    /// Export valid records (or syntax errors) of one file as CSV
    Export(ExportArgs),
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Files or directories to validate
    ///
    /// Directories are searched recursively for files named ads.txt or app-ads.txt.
    /// Use `-` to read from standard input.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Number of partners listed in the top-partner ranking
    #[arg(long = "top", value_name = "COUNT", help = "Number of top partners to list")]
    pub top: Option<usize>,

    /// Maximum number of syntax errors printed per file in human output
    #[arg(
        long = "max-errors",
        value_name = "COUNT",
        help = "Maximum syntax errors printed per file"
    )]
    pub max_errors: Option<usize>,

    /// Fail (exit status 1) when any syntax error is found
    #[arg(long = "strict", help = "Exit with an error status if any syntax error is found")]
    pub strict: bool,

    /// Number of files read concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of files read concurrently"
    )]
    pub workers: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// File to export, or `-` for standard input
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Destination CSV file, `-` for standard output
    ///
    /// Defaults to cleaned_<input name>.csv in the current directory.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Only export records whose domain or publisher ID contains this text
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Export syntax errors instead of valid records
    #[arg(long = "errors", conflicts_with = "search")]
    pub errors: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV of syntax errors
    Csv,
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ValidateArgs {
    /// Check argument values that clap cannot
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(Error::configuration("--workers must be at least 1"));
        }

        let stdin_count = self
            .inputs
            .iter()
            .filter(|input| input.as_str() == STDIO_MARKER)
            .count();
        if stdin_count > 1 {
            return Err(Error::configuration(
                "Standard input ('-') can only be given once",
            ));
        }

        Ok(())
    }

    /// Get log level based on verbosity and quiet settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl ExportArgs {
    /// Get log level based on verbosity and quiet settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Whether the CSV goes to standard output
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_deref() == Some(STDIO_MARKER)
    }
}
