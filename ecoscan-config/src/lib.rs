//! Shared configuration library for EcoScan.
//!
//! Resolves an [`AppConfig`] from an optional `.env` file, a TOML or JSON
//! config file (or inline JSON) and per-field environment overrides, and
//! installs the `tracing` subscriber the binaries log through.

pub mod loader;
pub mod logging;
pub mod models;
pub mod util;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigSource,
    error::ConfigLoadError,
};
pub use models::{AppConfig, LoggingConfig, OutputConfig};
