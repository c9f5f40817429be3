//! Export command implementation
//!
//! Writes the valid records of one source (optionally filtered by a search
//! term) or its syntax errors as CSV.

use super::shared::{InputSource, RunStats, read_source, setup_logging};
use crate::app::services::adstxt_parser::parse;
use crate::app::services::export::{cleaned_file_name, write_errors_csv, write_records_csv};
use crate::app::services::summary::search;
use crate::cli::args::ExportArgs;
use crate::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Export command runner
pub async fn run_export(args: ExportArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    debug!("Export arguments: {:?}", args);

    let source = InputSource::from_arg(&args.input);
    if let InputSource::File(path) = &source {
        if !path.exists() {
            return Err(Error::input_not_found(path.display().to_string()));
        }
        if path.is_dir() {
            return Err(Error::configuration(format!(
                "Export expects a single file, got directory {}",
                path.display()
            )));
        }
    }

    let text = read_source(&source).await?;
    let result = parse(&text);

    let mut buffer = Vec::new();
    let rows = if args.errors {
        write_errors_csv(&mut buffer, &result.errors)?
    } else {
        let term = args.search.as_deref().unwrap_or("");
        write_records_csv(&mut buffer, search(&result.records, term))?
    };

    let destination = if args.writes_to_stdout() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&buffer)
            .map_err(|e| Error::io("Failed to write to standard output", e))?;
        "stdout".to_string()
    } else {
        let path = export_path(&args, &source);
        tokio::fs::write(&path, &buffer)
            .await
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
        path.display().to_string()
    };

    info!("Exported {} rows from {} to {}", rows, source, destination);

    Ok(RunStats {
        sources_processed: 1,
        sources_failed: 0,
        records: result.records.len(),
        syntax_errors: result.errors.len(),
        processing_time: start_time.elapsed(),
    })
}

/// Destination file for an export when not writing to stdout
pub fn export_path(args: &ExportArgs, source: &InputSource) -> PathBuf {
    match &args.output {
        Some(output) => PathBuf::from(output),
        None => PathBuf::from(cleaned_file_name(&source.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;

    fn export_args(argv: &[&str]) -> ExportArgs {
        let mut full = vec!["adstxt-validator", "export"];
        full.extend_from_slice(argv);
        match Args::try_parse_from(full).unwrap().command {
            Some(Commands::Export(args)) => args,
            other => panic!("Expected export command, got {:?}", other),
        }
    }

    #[test]
    fn test_export_path_default() {
        let args = export_args(&["sites/example/app-ads.txt"]);
        let source = InputSource::from_arg(&args.input);
        assert_eq!(
            export_path(&args, &source),
            PathBuf::from("cleaned_app-ads.txt.csv")
        );

        let args = export_args(&["-"]);
        let source = InputSource::from_arg(&args.input);
        assert_eq!(export_path(&args, &source), PathBuf::from("cleaned_stdin.csv"));
    }

    #[test]
    fn test_export_path_explicit() {
        let args = export_args(&["ads.txt", "-o", "/tmp/out.csv"]);
        let source = InputSource::from_arg(&args.input);
        assert_eq!(export_path(&args, &source), PathBuf::from("/tmp/out.csv"));
    }
}
