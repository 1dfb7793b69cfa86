use super::filtering::{matches_filters, matches_search};
use super::sorting::sort_with_criteria;
use super::types::{ProductQuery, QueryPage};
use crate::catalog::Catalog;
use ecoscan_model::Product;
use tracing::debug;

/// Run `query` over `products`: filter, search, sort, then paginate.
pub fn execute<'a>(
    products: &'a [Product],
    query: &ProductQuery,
) -> QueryPage<'a> {
    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|product| matches_filters(product, &query.filters))
        .filter(|product| {
            query
                .search
                .as_ref()
                .is_none_or(|search| matches_search(product, search))
        })
        .collect();

    if let Some(criteria) = query.sort.as_ref() {
        sort_with_criteria(&mut matched, criteria);
    }

    let total = matched.len();
    let offset = query.pagination.offset.min(total);
    let items: Vec<&Product> = matched
        .into_iter()
        .skip(offset)
        .take(query.pagination.limit.unwrap_or(usize::MAX))
        .collect();

    debug!(total, offset, returned = items.len(), "Executed product query");
    QueryPage {
        total,
        offset,
        items,
    }
}

impl Catalog {
    pub fn query(&self, query: &ProductQuery) -> QueryPage<'_> {
        execute(self.products(), query)
    }
}
