use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML configuration {origin}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse JSON configuration {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("configuration {origin} is neither TOML ({toml}) nor JSON ({json})")]
    UnknownFormat {
        origin: String,
        toml: String,
        json: String,
    },
    #[error("invalid value '{value}' for {name}")]
    InvalidEnv { name: &'static str, value: String },
    #[error(transparent)]
    Catalog(#[from] ecoscan_core::CatalogError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
