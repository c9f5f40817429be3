//! Shared components for CLI commands
//!
//! This module contains input resolution, source reading, logging setup and the
//! run statistics shared by the command implementations.

use crate::config::ValidatorConfig;
use crate::constants::{ADSTXT_FILE_NAMES, STDIN_SOURCE_NAME, STDIO_MARKER};
use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Run statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of sources read and parsed
    pub sources_processed: usize,
    /// Number of sources that could not be read
    pub sources_failed: usize,
    /// Valid records across all sources
    pub records: usize,
    /// Syntax errors across all sources
    pub syntax_errors: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Where ads.txt text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a single command-line argument without directory expansion
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIO_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Name used in reports and export file names
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_SOURCE_NAME.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Expand command-line inputs into concrete sources
///
/// Directories are walked recursively for ads.txt / app-ads.txt files, sorted by
/// path. Missing paths are an error.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for input in inputs {
        match InputSource::from_arg(input) {
            InputSource::Stdin => sources.push(InputSource::Stdin),
            InputSource::File(path) => {
                if !path.exists() {
                    return Err(Error::input_not_found(path.display().to_string()));
                }
                if path.is_dir() {
                    let found = discover_adstxt_files(&path)?;
                    info!(
                        "Found {} ads.txt files under {}",
                        found.len(),
                        path.display()
                    );
                    sources.extend(found.into_iter().map(InputSource::File));
                } else {
                    sources.push(InputSource::File(path));
                }
            }
        }
    }

    Ok(sources)
}

/// Recursively find files named ads.txt or app-ads.txt
pub fn discover_adstxt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to walk {}", dir.display()), e)
        })?;

        let is_adstxt = entry
            .file_name()
            .to_str()
            .is_some_and(|name| ADSTXT_FILE_NAMES.contains(&name));

        if entry.file_type().is_file() && is_adstxt {
            debug!("Discovered {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Read a source as UTF-8 text, dropping a leading byte order mark
pub async fn read_source(source: &InputSource) -> Result<String> {
    let bytes = match source {
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            buffer
        }
        InputSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?,
    };

    debug!("Read {} bytes from {}", bytes.len(), source);
    decode_text(source, bytes)
}

/// Decode raw bytes as UTF-8 text
pub fn decode_text(source: &InputSource, bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|_| Error::invalid_encoding(source.name()))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from -v/-q.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("adstxt_validator={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from defaults and environment
pub fn load_configuration() -> Result<ValidatorConfig> {
    let config = ValidatorConfig::from_env()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}
