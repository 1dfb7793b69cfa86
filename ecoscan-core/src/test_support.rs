//! Fixtures shared by the unit test modules.

use crate::generator::{GeneratorOptions, ProductGenerator};
use ecoscan_model::{Product, Rating, SustainabilityScore};

/// A fully populated record with the fields most tests care about pinned.
pub(crate) fn product(id: u32, name: &str, price: f64) -> Product {
    let mut generator =
        ProductGenerator::new(GeneratorOptions::with_seed(u64::from(id)))
            .expect("default options are valid");
    let mut product = generator.generate_product(id);
    product.name = name.to_string();
    product.price = price;
    product.original_price = price;
    product
}

pub(crate) fn with_rating(mut product: Product, tenths: u8) -> Product {
    product.rating = Rating::saturating_tenths(tenths);
    product
}

pub(crate) fn with_score(mut product: Product, score: u8) -> Product {
    product.sustainability_score = SustainabilityScore::saturating(score);
    product
}
