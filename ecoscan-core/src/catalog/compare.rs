//! Side-by-side comparison of two records, as shown after scanning a
//! product and picking an alternative.

use ecoscan_model::prelude::{Product, ProductId, round_cents};
use serde::Serialize;

/// Deltas are `second - first`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComparison {
    pub first: ProductId,
    pub second: ProductId,
    pub score_delta: i16,
    pub price_delta: f64,
    pub rating_delta: f32,
    /// Higher sustainability score; `None` on a tie.
    pub greener: Option<ProductId>,
    /// Lower price; `None` on a tie.
    pub cheaper: Option<ProductId>,
    pub shared_certifications: Vec<String>,
}

pub fn compare_products(
    first: &Product,
    second: &Product,
) -> ProductComparison {
    let first_score = first.sustainability_score.value();
    let second_score = second.sustainability_score.value();
    let greener = match first_score.cmp(&second_score) {
        std::cmp::Ordering::Greater => Some(first.id),
        std::cmp::Ordering::Less => Some(second.id),
        std::cmp::Ordering::Equal => None,
    };
    let cheaper = if first.price < second.price {
        Some(first.id)
    } else if second.price < first.price {
        Some(second.id)
    } else {
        None
    };
    let rating_tenths =
        i16::from(second.rating.tenths()) - i16::from(first.rating.tenths());

    ProductComparison {
        first: first.id,
        second: second.id,
        score_delta: i16::from(second_score) - i16::from(first_score),
        price_delta: round_cents(second.price - first.price),
        rating_delta: f32::from(rating_tenths) / 10.0,
        greener,
        cheaper,
        shared_certifications: first
            .certifications
            .iter()
            .filter(|cert| second.has_certification(cert))
            .cloned()
            .collect(),
    }
}
