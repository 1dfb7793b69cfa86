//! Core data model definitions shared across EcoScan crates.
#![allow(missing_docs)]

pub mod category;
pub mod error;
pub mod ids;
pub mod numbers;
pub mod prelude;
pub mod product;

// Intentionally curated re-exports for downstream consumers.
pub use category::Category;
pub use error::{ModelError, Result as ModelResult};
pub use ids::ProductId;
pub use numbers::{Rating, SustainabilityScore};
pub use product::{
    Alternative, CarbonFootprint, DetailedAnalysis, NutritionFacts, Packaging,
    Product,
};
