//! Resolved configuration shapes.

mod env;

pub(crate) use env::EnvConfig;

use ecoscan_core::GeneratorOptions;
use serde::{Deserialize, Serialize};

/// Everything an EcoScan binary needs to start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How the synthetic catalog is generated.
    pub catalog: GeneratorOptions,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> ecoscan_core::Result<()> {
        self.catalog.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Colorize log lines.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON written to stdout.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
