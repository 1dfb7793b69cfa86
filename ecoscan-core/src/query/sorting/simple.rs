use super::keys::SortKey;
use crate::query::types::{SortBy, SortCriteria, SortOrder};
use ecoscan_model::Product;
use std::cmp::Reverse;

/// Sort borrowed records by `criteria` in place. Keys are extracted once
/// per record; the secondary field breaks primary ties in the same order.
/// Ties on both keep their relative order.
pub fn sort_with_criteria(items: &mut [&Product], criteria: &SortCriteria) {
    let key = |product: &&Product| {
        (
            SortKey::extract(product, criteria.primary),
            criteria
                .secondary
                .map(|secondary| SortKey::extract(product, secondary)),
        )
    };
    match criteria.order {
        SortOrder::Ascending => items.sort_by_cached_key(key),
        SortOrder::Descending => items.sort_by_cached_key(|p| Reverse(key(p))),
    }
}

/// Sort borrowed records on a single field. Ties keep their relative order.
pub fn sort_products(
    items: &mut [&Product],
    sort_by: SortBy,
    sort_order: SortOrder,
) {
    sort_with_criteria(
        items,
        &SortCriteria {
            primary: sort_by,
            order: sort_order,
            secondary: None,
        },
    );
}

/// The first `limit` records by `sort_by`, highest first. A limit past the
/// end of the slice returns every record.
pub fn rank_by(
    products: &[Product],
    sort_by: SortBy,
    limit: usize,
) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    sort_products(&mut ranked, sort_by, SortOrder::Descending);
    ranked.truncate(limit);
    ranked
}
