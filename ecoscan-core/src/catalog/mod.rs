//! The in-memory catalog and its lookup, search, ranking and sampling
//! helpers.
//!
//! A [`Catalog`] is built once by an explicit call ([`Catalog::generate`] or
//! [`Catalog::from_products`]) and then only read. Every helper borrows
//! records out of it; none of them mutate the catalog or fail on unusual
//! arguments. "Nothing matched" is an empty `Vec`, and single-record lookups
//! return `Option`.

pub mod compare;
pub mod snapshot;
pub mod stats;
pub mod vocabulary;

pub use compare::{ProductComparison, compare_products};
pub use stats::{CatalogStats, CategoryStats};

use crate::error::{CatalogError, Result};
use crate::generator::{GeneratorOptions, ProductGenerator};
use crate::query::filtering::{matches_price_range, matches_text};
use crate::query::sorting::{rank_by, sort_products};
use crate::query::types::{SortBy, SortOrder};
use ecoscan_model::{Product, ProductId};
use once_cell::sync::OnceCell;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;
use tracing::{debug, info};

/// Default `limit` for the ranking helpers.
pub const DEFAULT_RANKING_LIMIT: usize = 50;

static SHARED_CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    seed: Option<u64>,
}

impl Catalog {
    /// Generate a full catalog in one blocking pass.
    pub fn generate(options: &GeneratorOptions) -> Result<Self> {
        let started = Instant::now();
        let mut generator = ProductGenerator::new(options.clone())?;
        let seed = generator.seed();
        info!(size = options.size, seed, "Generating product catalog");

        let products = generator.generate_all();

        info!(
            size = products.len(),
            seed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Product catalog ready"
        );
        Ok(Self {
            products,
            seed: Some(seed),
        })
    }

    /// Wrap an existing record list (for example a loaded snapshot).
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            seed: None,
        }
    }

    pub(crate) fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Seed the catalog was generated from, when known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_product_by_id(
        &self,
        id: impl Into<ProductId>,
    ) -> Option<&Product> {
        let id = id.into();
        // Generated catalogs store id N at index N - 1.
        let slot = (id.value() as usize).checked_sub(1);
        if let Some(product) = slot.and_then(|idx| self.products.get(idx))
            && product.id == id
        {
            return Some(product);
        }
        self.products.iter().find(|product| product.id == id)
    }

    pub fn get_product_by_barcode(&self, barcode: &str) -> Option<&Product> {
        let barcode = barcode.trim();
        self.products
            .iter()
            .find(|product| product.barcode == barcode)
    }

    /// Exact slug match, catalog order preserved.
    pub fn get_products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category.as_str() == category)
            .collect()
    }

    /// Exact match on the subcategory alone; the category is not consulted.
    pub fn get_products_by_subcategory(
        &self,
        subcategory: &str,
    ) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.subcategory == subcategory)
            .collect()
    }

    /// Case-insensitive substring search over name, brand, description,
    /// features and materials. An empty query matches every record.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| matches_text(product, &needle))
            .collect();
        debug!(query, hits = results.len(), "search_products");
        results
    }

    /// Highest rated records first. `None` uses [`DEFAULT_RANKING_LIMIT`].
    pub fn get_top_rated_products(&self, limit: Option<usize>) -> Vec<&Product> {
        rank_by(
            &self.products,
            SortBy::Rating,
            limit.unwrap_or(DEFAULT_RANKING_LIMIT),
        )
    }

    /// Highest sustainability scores first. `None` uses
    /// [`DEFAULT_RANKING_LIMIT`].
    pub fn get_most_sustainable_products(
        &self,
        limit: Option<usize>,
    ) -> Vec<&Product> {
        rank_by(
            &self.products,
            SortBy::SustainabilityScore,
            limit.unwrap_or(DEFAULT_RANKING_LIMIT),
        )
    }

    /// Records with `min <= price <= max`. An inverted range yields nothing.
    pub fn get_products_by_price_range(
        &self,
        min: f64,
        max: f64,
    ) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| matches_price_range(product, min, max))
            .collect()
    }

    /// `count` distinct records in random order, drawn from the thread RNG.
    pub fn get_random_products(&self, count: usize) -> Vec<&Product> {
        self.get_random_products_with(count, &mut rand::rng())
    }

    /// Shuffle the whole catalog and keep the first `count` records. A
    /// `count` larger than the catalog returns every record once.
    pub fn get_random_products_with<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<&Product> {
        let mut pool: Vec<&Product> = self.products.iter().collect();
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }

    /// Every record sorted by `field`; the catalog itself keeps its order.
    pub fn sorted_by(&self, field: SortBy, order: SortOrder) -> Vec<&Product> {
        let mut items: Vec<&Product> = self.products.iter().collect();
        sort_products(&mut items, field, order);
        items
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::collect(&self.products)
    }

    /// Compare two records by id. Absent when either id is unknown.
    pub fn compare(
        &self,
        a: impl Into<ProductId>,
        b: impl Into<ProductId>,
    ) -> Option<ProductComparison> {
        let a = self.get_product_by_id(a)?;
        let b = self.get_product_by_id(b)?;
        Some(compare_products(a, b))
    }
}

/// Install the process-wide catalog. Only succeeds once.
pub fn install_shared(catalog: Catalog) -> Result<&'static Catalog> {
    SHARED_CATALOG
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInstalled)?;
    SHARED_CATALOG.get().ok_or(CatalogError::AlreadyInstalled)
}

/// The process-wide catalog, if one has been installed.
pub fn shared() -> Option<&'static Catalog> {
    SHARED_CATALOG.get()
}

/// Return the process-wide catalog, generating it on first use.
pub fn shared_or_generate(
    options: &GeneratorOptions,
) -> Result<&'static Catalog> {
    SHARED_CATALOG.get_or_try_init(|| Catalog::generate(options))
}

#[cfg(test)]
mod tests;
