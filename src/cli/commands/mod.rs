//! Command implementations for the validator CLI
//!
//! Each command is implemented in its own module:
//! - `validate`: parse, summarize and report on one or more sources
//! - `export`: write cleaned records or syntax errors of one source as CSV

pub mod export;
pub mod shared;
pub mod validate;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler for a subcommand
pub async fn run(command: Commands) -> Result<RunStats> {
    match command {
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
    }
}
