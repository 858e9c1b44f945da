//! Optional TOML configuration for the `polcheck` binary.
//!
//! Every field has a default, so an empty file is valid. Command-line flags
//! take precedence over the file, and `RUST_LOG` over `log_filter`.
//!
//! Example:
//! ```toml
//! log_filter = "polcheck_verify=debug"
//! format = "json"
//! ```

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use polcheck_contracts::error::{PolcheckError, PolcheckResult};

/// How the verdict is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `true` or `false`.
    #[default]
    Plain,
    /// The full validation report as pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            format: OutputFormat::Plain,
        }
    }
}

impl CliConfig {
    /// Returns `PolcheckError::ConfigError` if `s` is not valid TOML or has
    /// fields this version does not know.
    pub fn from_toml_str(s: &str) -> PolcheckResult<Self> {
        toml::from_str(s).map_err(|e| PolcheckError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    pub fn from_file(path: &Path) -> PolcheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PolcheckError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
