//! The synthetic product record and its nested value objects.

use crate::category::Category;
use crate::ids::ProductId;
use crate::numbers::{Rating, SustainabilityScore};

/// Unit suffix used by every carbon accounting figure.
pub const CO2_UNIT: &str = "kg CO₂";

/// One synthetic catalog entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub barcode: String,

    pub price: f64,
    pub original_price: f64,
    pub rating: Rating,
    pub reviews: u32,
    pub in_stock: bool,
    pub fast_shipping: bool,

    pub category: Category,
    pub subcategory: String,

    pub sustainability_score: SustainabilityScore,
    pub co2_saved: String,
    pub water_usage: String,
    pub energy_source: String,
    pub labor_practices: String,
    pub animal_testing: bool,
    pub vegan: bool,

    pub materials: Vec<String>,
    pub features: Vec<String>,
    pub certifications: Vec<String>,
    pub origin: String,

    pub packaging: Packaging,
    pub carbon_footprint: CarbonFootprint,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub ingredients: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub nutrition_facts: Option<NutritionFacts>,

    pub alternatives: [Alternative; 2],

    pub description: String,
    pub detailed_analysis: DetailedAnalysis,
    pub image: String,
}

impl Product {
    /// Markdown from `original_price` to `price`, in whole percent.
    pub fn discount_percent(&self) -> u8 {
        if self.original_price <= 0.0 || self.original_price <= self.price {
            return 0;
        }
        let ratio = 1.0 - self.price / self.original_price;
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn is_food(&self) -> bool {
        self.category.is_food()
    }

    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications
            .iter()
            .any(|c| c.eq_ignore_ascii_case(certification))
    }
}

/// Packaging descriptor with independently drawn flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Packaging {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub recyclable: bool,
    pub biodegradable: bool,
    pub plastic_free: bool,
}

/// Carbon accounting figures, each formatted as `"<decimal> kg CO₂"`.
///
/// `total` is drawn independently and is not required to equal
/// `production + transport`; see [`CarbonFootprint::component_sum`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarbonFootprint {
    pub production: String,
    pub transport: String,
    pub total: String,
}

impl CarbonFootprint {
    pub fn format_kg(value: f64) -> String {
        format!("{value:.1} {CO2_UNIT}")
    }

    /// Parse the numeric part of a `"<decimal> kg CO₂"` figure.
    pub fn parse_kg(raw: &str) -> Option<f64> {
        raw.split_whitespace().next()?.parse().ok()
    }

    pub fn total_kg(&self) -> Option<f64> {
        Self::parse_kg(&self.total)
    }

    /// Sum of the production and transport components.
    pub fn component_sum(&self) -> Option<f64> {
        Some(Self::parse_kg(&self.production)? + Self::parse_kg(&self.transport)?)
    }
}

/// Per-serving nutrition figures for food records.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutritionFacts {
    pub calories: u16,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

/// A synthesized competing product suggested as a substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Alternative {
    pub name: String,
    /// Product score plus an offset in -5..=10, clamped to 0..=100; may fall
    /// outside the product band.
    pub sustainability_score: u8,
    pub reason: String,
    pub price_comparison: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DetailedAnalysis {
    pub environmental_impact: String,
    pub social_impact: String,
    pub economic_impact: String,
    pub recommendations: Vec<String>,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn packaging_uses_type_key_and_camel_case() {
        let packaging = Packaging {
            kind: "Compostable pouch".into(),
            recyclable: true,
            biodegradable: true,
            plastic_free: false,
        };
        let value = serde_json::to_value(&packaging).unwrap();
        assert_eq!(value["type"], "Compostable pouch");
        assert_eq!(value["plasticFree"], false);
    }

    #[test]
    fn rating_and_score_serialize_as_plain_numbers() {
        let rating = Rating::from_tenths(42).unwrap();
        let score = SustainabilityScore::new(88).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4.2");
        assert_eq!(serde_json::to_string(&score).unwrap(), "88");
        assert!(serde_json::from_str::<SustainabilityScore>("12").is_err());
        assert!(serde_json::from_str::<Category>("\"food-beverages\"").is_ok());
    }
}
