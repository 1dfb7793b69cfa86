//! Record-level predicates shared by the catalog helpers and the query
//! executor.

use super::types::{ProductFilters, ScalarRange, SearchField, SearchQuery};
use ecoscan_model::Product;

/// Substring match over name, brand, description, features and materials.
/// `needle` must already be lowercase; an empty needle matches everything.
pub fn matches_text(product: &Product, needle: &str) -> bool {
    matches_fields(product, needle, &[SearchField::All])
}

/// Case-insensitive search restricted to the requested fields. No fields
/// means all of them.
pub fn matches_search(product: &Product, search: &SearchQuery) -> bool {
    let needle = search.text.trim().to_lowercase();
    if search.fields.is_empty() {
        matches_text(product, &needle)
    } else {
        matches_fields(product, &needle, &search.fields)
    }
}

fn matches_fields(
    product: &Product,
    needle: &str,
    fields: &[SearchField],
) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    let any_contains =
        |list: &[String]| list.iter().any(|v| contains(v.as_str()));

    fields.iter().any(|field| match field {
        SearchField::Name => contains(product.name.as_str()),
        SearchField::Brand => contains(product.brand.as_str()),
        SearchField::Description => contains(product.description.as_str()),
        SearchField::Features => any_contains(product.features.as_slice()),
        SearchField::Materials => any_contains(product.materials.as_slice()),
        SearchField::All => {
            contains(product.name.as_str())
                || contains(product.brand.as_str())
                || contains(product.description.as_str())
                || any_contains(product.features.as_slice())
                || any_contains(product.materials.as_slice())
        }
    })
}

/// Inclusive on both ends. `min > max` never matches.
pub fn matches_price_range(product: &Product, min: f64, max: f64) -> bool {
    ScalarRange::new(min, max).contains(&product.price)
}

/// Every set filter must hold.
pub fn matches_filters(product: &Product, filters: &ProductFilters) -> bool {
    if let Some(category) = filters.category
        && product.category != category
    {
        return false;
    }
    if let Some(subcategory) = filters.subcategory.as_deref()
        && product.subcategory != subcategory
    {
        return false;
    }
    if let Some(range) = filters.price_range
        && !range.contains(&product.price)
    {
        return false;
    }
    if let Some(min) = filters.min_sustainability
        && product.sustainability_score.value() < min
    {
        return false;
    }
    if let Some(min) = filters.min_rating
        && product.rating.value() < min
    {
        return false;
    }
    if filters.in_stock_only && !product.in_stock {
        return false;
    }
    if filters.vegan_only && !product.vegan {
        return false;
    }
    if filters.plastic_free_only && !product.packaging.plastic_free {
        return false;
    }
    filters
        .certifications
        .iter()
        .all(|certification| product.has_certification(certification))
}
