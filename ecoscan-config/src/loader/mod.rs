//! Resolve an [`AppConfig`] from files and the environment.
//!
//! Evaluation order:
//! 1. an explicit path passed to the loader (`--config`),
//! 2. `$ECOSCAN_CONFIG_PATH` (TOML or JSON file),
//! 3. `$ECOSCAN_CONFIG_JSON` (inline JSON),
//! 4. the first default file that exists,
//! 5. built-in defaults.
//!
//! Per-field environment overrides are applied on top of whichever source
//! won, after an optional `.env` file has been loaded into the process
//! environment.

pub mod error;

use crate::models::{AppConfig, EnvConfig};
use error::ConfigLoadError;
use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("ecoscan.toml"),
        PathBuf::from("ecoscan.json"),
        PathBuf::from("config/ecoscan.toml"),
        PathBuf::from("config/ecoscan.json"),
    ]
});

/// Source that produced the file-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    /// Skip `.env` loading entirely.
    skip_env_file: bool,
    /// Directory default config files are resolved against. Defaults to
    /// the working directory.
    search_root: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Load `.env`, then resolve against the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(|name| std::env::var(name).ok())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve against an arbitrary variable lookup instead of the process
    /// environment. No `.env` file is read.
    pub fn load_with_env(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let env = EnvConfig::gather(&lookup)?;
        let (mut config, source) = self.load_file_config(&env)?;
        env.apply(&mut config);
        config.validate()?;

        info!(source = ?source, "Resolved configuration");
        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded: false,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }
        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        let loaded = result.or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;
        debug!(loaded, "Checked for .env file");
        Ok(loaded)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(AppConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = parse_json(raw, "ECOSCAN_CONFIG_JSON")?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((AppConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self.options.search_root.as_deref();
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| match root {
                Some(root) => root.join(candidate),
                None => candidate.clone(),
            })
            .find(|path| path.exists())
    }
}

/// Read a config file, choosing the format by extension. Unknown
/// extensions try TOML first, then JSON.
pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => parse_toml(&contents, &origin),
        _ => parse_from_str(&contents, &origin),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<AppConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::UnknownFormat {
                origin: origin.to_string(),
                toml: toml_err.to_string(),
                json: json_err.to_string(),
            }
        })
    })
}

fn parse_toml(
    contents: &str,
    origin: &str,
) -> Result<AppConfig, ConfigLoadError> {
    toml::from_str(contents).map_err(|source| ConfigLoadError::Toml {
        origin: origin.to_string(),
        source,
    })
}

fn parse_json(
    contents: &str,
    origin: &str,
) -> Result<AppConfig, ConfigLoadError> {
    serde_json::from_str(contents).map_err(|source| ConfigLoadError::Json {
        origin: origin.to_string(),
        source,
    })
}
