//! Consumer-facing snapshot of the model surface.

pub use super::category::Category;
pub use super::ids::ProductId;
pub use super::numbers::{Rating, SustainabilityScore, round_cents};
pub use super::product::{
    Alternative, CO2_UNIT, CarbonFootprint, DetailedAnalysis, NutritionFacts,
    Packaging, Product,
};
