//! # EcoScan Core
//!
//! Synthetic product catalog for the EcoScan sustainability tracker,
//! together with the pure functions used to fetch, filter, search, rank and
//! sample it.
//!
//! ## Overview
//!
//! - **Generation**: a seeded [`generator::ProductGenerator`] synthesizes
//!   fully populated [`Product`] records from fixed vocabularies.
//! - **Catalog**: [`Catalog`] owns the records and hands out shared borrows
//!   through lookup, search, ranking and sampling helpers.
//! - **Queries**: [`query::ProductQueryBuilder`] composes filters, search,
//!   ordering and pagination over a catalog.
//! - **Snapshots**: catalogs can be written to and read from JSON with
//!   their generation seed.
//!
//! ## Examples
//!
//! ```no_run
//! use ecoscan_core::{Catalog, GeneratorOptions};
//!
//! let catalog = Catalog::generate(&GeneratorOptions::with_seed(42))?;
//! let greenest = catalog.get_most_sustainable_products(Some(5));
//! let scanned = catalog.get_product_by_id(17u32);
//! # Ok::<(), ecoscan_core::CatalogError>(())
//! ```
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod generator;
pub mod query;

#[cfg(test)]
mod test_support;

pub use catalog::vocabulary::{
    brands, categories, certifications, features, materials, origins,
    subcategories,
};
pub use catalog::{
    Catalog, CatalogStats, CategoryStats, DEFAULT_RANKING_LIMIT,
    ProductComparison, compare_products, install_shared, shared,
    shared_or_generate,
};
pub use error::{CatalogError, Result};
pub use generator::{DEFAULT_CATALOG_SIZE, GeneratorOptions, ProductGenerator};
pub use query::{
    ProductQuery, ProductQueryBuilder, QueryPage, SortBy, SortOrder,
};

pub use ecoscan_model::{Category, Product, ProductId};
