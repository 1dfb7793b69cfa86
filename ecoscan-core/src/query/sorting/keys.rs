//! Sort key types for comparing product records

use crate::query::types::SortBy;
use ecoscan_model::Product;
use ordered_float::OrderedFloat;

/// A comparable value extracted from a record for one [`SortBy`] field.
///
/// Keys of different variants never meet in practice because both sides of
/// a comparison are extracted with the same field.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Integer(u64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl SortKey {
    /// Extract the key for `field` from `product`.
    pub fn extract(product: &Product, field: SortBy) -> Self {
        match field {
            SortBy::Id => SortKey::Integer(u64::from(product.id.value())),
            SortBy::Name => SortKey::Text(product.name.to_lowercase()),
            SortBy::Price => SortKey::Float(OrderedFloat(product.price)),
            // Tenths keep the comparison exact.
            SortBy::Rating => {
                SortKey::Integer(u64::from(product.rating.tenths()))
            }
            SortBy::Reviews => SortKey::Integer(u64::from(product.reviews)),
            SortBy::SustainabilityScore => {
                SortKey::Integer(u64::from(product.sustainability_score.value()))
            }
            SortBy::Discount => SortKey::Float(OrderedFloat(discount_ratio(
                product.price,
                product.original_price,
            ))),
        }
    }
}

fn discount_ratio(price: f64, original_price: f64) -> f64 {
    if original_price > 0.0 && original_price > price {
        (original_price - price) / original_price
    } else {
        0.0
    }
}
