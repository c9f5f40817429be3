//! Validate command implementation
//!
//! Reads every requested source, parses and summarizes it, and prints one
//! report per source in the requested format.

use super::shared::{
    InputSource, RunStats, load_configuration, read_source, resolve_inputs, setup_logging,
};
use crate::app::services::adstxt_parser::parse;
use crate::app::services::export::{Report, reports_to_json, write_report_errors_csv};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::ValidatorConfig;
use crate::{Error, Result};
use colored::*;
use futures::stream::{self, StreamExt};
use std::fmt::Write as _;
use std::time::Instant;
use tracing::{debug, error, info};

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    debug!("Validate arguments: {:?}", args);

    args.validate()?;

    let mut config = load_configuration()?;
    apply_cli_overrides(&mut config, &args);
    config.validate()?;

    let sources = resolve_inputs(&args.inputs)?;
    if sources.is_empty() {
        return Err(Error::configuration(
            "No ads.txt or app-ads.txt files found in the given inputs",
        ));
    }
    info!("Validating {} source(s)", sources.len());

    // Read concurrently, keep input order for reporting
    let contents: Vec<(InputSource, Result<String>)> = stream::iter(sources)
        .map(|source| async move {
            let text = read_source(&source).await;
            (source, text)
        })
        .buffered(config.workers)
        .collect()
        .await;

    let mut stats = RunStats::default();
    let mut reports = Vec::new();
    let mut first_failure = None;

    for (source, text) in contents {
        match text {
            Ok(text) => {
                let result = parse(&text);
                stats.sources_processed += 1;
                stats.records += result.records.len();
                stats.syntax_errors += result.errors.len();
                info!(
                    "{}: {} records, {} syntax errors",
                    source,
                    result.records.len(),
                    result.errors.len()
                );
                reports.push(Report::build(source.name(), &result, config.top_partners));
            }
            Err(e) => {
                error!("Failed to read {}: {:#}", source, e);
                stats.sources_failed += 1;
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    print_reports(&reports, args.output_format, &config)?;

    stats.processing_time = start_time.elapsed();
    info!(
        "Validated {} source(s) in {:.2}s",
        stats.sources_processed,
        stats.processing_time.as_secs_f64()
    );

    if let Some(e) = first_failure {
        return Err(e);
    }
    if config.strict && stats.syntax_errors > 0 {
        let failing = reports.iter().filter(|r| !r.is_clean()).count();
        return Err(Error::syntax_errors(stats.syntax_errors, failing));
    }

    Ok(stats)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut ValidatorConfig, args: &ValidateArgs) {
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(top) = args.top {
        config.top_partners = top;
    }
    if let Some(max_errors) = args.max_errors {
        config.max_errors_shown = max_errors;
    }
    if args.strict {
        config.strict = true;
    }
}

fn print_reports(reports: &[Report], format: OutputFormat, config: &ValidatorConfig) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for report in reports {
                print!("{}", format_human_report(report, config.max_errors_shown));
            }
        }
        OutputFormat::Json => println!("{}", reports_to_json(reports)?),
        OutputFormat::Csv => {
            write_report_errors_csv(std::io::stdout().lock(), reports)?;
        }
    }
    Ok(())
}

/// Render a report for terminal output
pub fn format_human_report(report: &Report, max_errors: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.source.bright_cyan().bold());
    let _ = writeln!(out, "{}", "=".repeat(report.source.chars().count().max(12)));

    match &report.statistics {
        Some(stats) => {
            let _ = writeln!(out, "  Total Lines:      {}", stats.total_lines.to_string().bold());
            let _ = writeln!(out, "  Unique Partners:  {}", stats.unique_partners.to_string().bold());
            let _ = writeln!(
                out,
                "  DIRECT:           {} ({:.1}%)",
                stats.direct_count.to_string().green(),
                stats.direct_ratio()
            );
            let _ = writeln!(out, "  RESELLER:         {}", stats.reseller_count.to_string().blue());
        }
        None => {
            let _ = writeln!(out, "  {}", "No valid records".yellow());
        }
    }

    if !report.top_partners.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", "Top Advertising Systems".bold());
        for (rank, partner) in report.top_partners.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>3}. {:<40} {}",
                rank + 1,
                partner.domain,
                partner.count
            );
        }
    }

    let _ = writeln!(out);
    if report.is_clean() {
        let _ = writeln!(out, "  {}", "No IAB syntax errors found.".green());
    } else {
        let _ = writeln!(
            out,
            "  {}",
            format!("Syntax Errors Found: {}", report.error_count).red().bold()
        );
        for error in report.errors.iter().take(max_errors) {
            let _ = writeln!(
                out,
                "  line {:>5}: {} | {}",
                error.line_number,
                error.message(),
                error.content.bright_black()
            );
        }
        if report.errors.len() > max_errors {
            let _ = writeln!(out, "  ... and {} more", report.errors.len() - max_errors);
        }
    }
    let _ = writeln!(out);

    out
}
