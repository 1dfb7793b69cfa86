use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Number of records in a full catalog.
pub const DEFAULT_CATALOG_SIZE: usize = 10_000;

/// Options describing how the synthetic catalog should be generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Number of records to synthesize. Ids run from 1 to `size`.
    pub size: usize,
    /// Seed for the generator's PRNG. When omitted a random seed is chosen
    /// and recorded on the resulting catalog.
    pub seed: Option<u64>,
    /// Half-open `[min, max)` range prices are drawn from.
    pub price_range: (f64, f64),
    /// Upper bound of the markup applied to derive `original_price`.
    pub max_markup: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_CATALOG_SIZE,
            seed: None,
            price_range: (5.0, 505.0),
            max_markup: 0.5,
        }
    }
}

impl GeneratorOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.price_range;
        if !min.is_finite() || !max.is_finite() {
            return Err(CatalogError::InvalidOptions(
                "price range bounds must be finite".into(),
            ));
        }
        if min < 0.0 || min >= max {
            return Err(CatalogError::InvalidOptions(format!(
                "price range must satisfy 0 <= min < max (got {min}..{max})"
            )));
        }
        if !self.max_markup.is_finite() || self.max_markup < 0.0 {
            return Err(CatalogError::InvalidOptions(format!(
                "max markup must be a non-negative number (got {})",
                self.max_markup
            )));
        }
        if !(max * (1.0 + self.max_markup) * 100.0).is_finite() {
            return Err(CatalogError::InvalidOptions(format!(
                "price range {min}..{max} with max markup {} overflows",
                self.max_markup
            )));
        }
        if u32::try_from(self.size).is_err() {
            return Err(CatalogError::InvalidOptions(format!(
                "catalog size {} exceeds the id space",
                self.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_full_catalog() {
        let opts = GeneratorOptions::default();
        assert_eq!(opts.size, DEFAULT_CATALOG_SIZE);
        assert!(opts.seed.is_none());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let mut opts = GeneratorOptions::with_seed(1);
        opts.price_range = (50.0, 20.0);
        assert!(matches!(
            opts.validate(),
            Err(CatalogError::InvalidOptions(_))
        ));

        opts.price_range = (5.0, f64::INFINITY);
        assert!(opts.validate().is_err());

        opts.price_range = (5.0, 10.0);
        opts.max_markup = -0.1;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn validate_rejects_overflowing_markups() {
        let mut opts = GeneratorOptions::with_seed(1);
        opts.max_markup = 1e308;
        assert!(matches!(
            opts.validate(),
            Err(CatalogError::InvalidOptions(_))
        ));

        opts.max_markup = 0.5;
        opts.price_range = (0.0, 1e307);
        assert!(matches!(
            opts.validate(),
            Err(CatalogError::InvalidOptions(_))
        ));

        opts.price_range = (0.0, 1e9);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: GeneratorOptions =
            serde_json::from_str(r#"{"size": 25, "seed": 9}"#).unwrap();
        assert_eq!(opts.size, 25);
        assert_eq!(opts.seed, Some(9));
        assert_eq!(opts.price_range, GeneratorOptions::default().price_range);
    }
}
