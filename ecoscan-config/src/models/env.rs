use super::AppConfig;
use crate::loader::error::ConfigLoadError;
use crate::util::{non_empty_var, parse_bool};
use ecoscan_core::GeneratorOptions;
use std::path::PathBuf;

/// Configuration values gathered from environment variables.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    /// Whole generator options as JSON; per-field variables apply on top.
    pub catalog_options: Option<GeneratorOptions>,
    pub catalog_size: Option<usize>,
    /// `Some(None)` forces a random seed.
    pub catalog_seed: Option<Option<u64>>,
    pub catalog_max_markup: Option<f64>,
    pub log_filter: Option<String>,
    pub log_ansi: Option<bool>,
    pub output_pretty: Option<bool>,
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigLoadError> {
    match non_empty_var(lookup, name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigLoadError::InvalidEnv { name, value: raw }),
        None => Ok(None),
    }
}

fn bool_var(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<bool>, ConfigLoadError> {
    match non_empty_var(lookup, name) {
        Some(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or(ConfigLoadError::InvalidEnv { name, value: raw }),
        None => Ok(None),
    }
}

impl EnvConfig {
    pub fn gather(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigLoadError> {
        let catalog_seed = match lookup("ECOSCAN_CATALOG_SEED") {
            None => None,
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("random")
                {
                    Some(None)
                } else {
                    let seed = trimmed.parse().map_err(|_| {
                        ConfigLoadError::InvalidEnv {
                            name: "ECOSCAN_CATALOG_SEED",
                            value: raw.clone(),
                        }
                    })?;
                    Some(Some(seed))
                }
            }
        };

        let catalog_options = non_empty_var(lookup, "ECOSCAN_CATALOG_OPTIONS")
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| ConfigLoadError::Json {
                    origin: "ECOSCAN_CATALOG_OPTIONS".into(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            config_path: non_empty_var(lookup, "ECOSCAN_CONFIG_PATH")
                .map(PathBuf::from),
            config_json: non_empty_var(lookup, "ECOSCAN_CONFIG_JSON"),
            catalog_options,
            catalog_size: parse_var(lookup, "ECOSCAN_CATALOG_SIZE")?,
            catalog_seed,
            catalog_max_markup: parse_var(lookup, "ECOSCAN_CATALOG_MAX_MARKUP")?,
            log_filter: non_empty_var(lookup, "ECOSCAN_LOG"),
            log_ansi: bool_var(lookup, "ECOSCAN_LOG_ANSI")?,
            output_pretty: bool_var(lookup, "ECOSCAN_OUTPUT_PRETTY")?,
        })
    }

    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(options) = &self.catalog_options {
            config.catalog = options.clone();
        }
        if let Some(size) = self.catalog_size {
            config.catalog.size = size;
        }
        if let Some(seed) = self.catalog_seed {
            config.catalog.seed = seed;
        }
        if let Some(markup) = self.catalog_max_markup {
            config.catalog.max_markup = markup;
        }
        if let Some(filter) = &self.log_filter {
            config.logging.filter = filter.clone();
        }
        if let Some(ansi) = self.log_ansi {
            config.logging.ansi = ansi;
        }
        if let Some(pretty) = self.output_pretty {
            config.output.pretty = pretty;
        }
    }
}
