//! polcheck: validate an IAM-style inline policy document.
//!
//! Prints `true` or `false` for a document that could be evaluated and exits
//! 0. A document that cannot be evaluated (missing file, invalid JSON) is
//! reported on stderr with exit status 1; it is never printed as `false`.
//!
//! Usage:
//!   polcheck policy.json
//!   polcheck --format json policy.json
//!   polcheck --config polcheck.toml policy.json

mod config;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use polcheck_contracts::error::{PolcheckError, PolcheckResult};

use config::{CliConfig, OutputFormat};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Validate the structure of an IAM-style inline policy document.
#[derive(Parser)]
#[command(
    name = "polcheck",
    about = "Validate an IAM-style inline policy document",
    long_about = "Checks PolicyName, the PolicyDocument wrapper and every statement's\n\
                  Effect, Action and Resource. Prints true or false."
)]
struct Cli {
    /// Path to the JSON policy document.
    path: PathBuf,

    /// Output format; overrides the configuration file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("polcheck: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter. Logs go to stderr so stdout
    // carries only the verdict.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let format = cli.format.unwrap_or(config.format);

    match render(&cli.path, format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("polcheck: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> PolcheckResult<CliConfig> {
    match path {
        Some(path) => CliConfig::from_file(path),
        None => Ok(CliConfig::default()),
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Evaluate the document at `path` and render the result in `format`.
fn render(path: &Path, format: OutputFormat) -> PolcheckResult<String> {
    debug!(path = %path.display(), ?format, "checking policy document");

    match format {
        OutputFormat::Plain => polcheck_verify::verify_path(path).map(|valid| valid.to_string()),
        OutputFormat::Json => {
            let report = polcheck_verify::explain_path(path)?;
            serde_json::to_string_pretty(&report).map_err(|e| PolcheckError::OutputError {
                reason: format!("failed to serialize report: {e}"),
            })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
