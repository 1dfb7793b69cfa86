use super::types::*;
use ecoscan_model::Category;

/// Fluent API for building product queries
#[derive(Debug, Clone, Default)]
pub struct ProductQueryBuilder {
    query: ProductQuery,
}

impl ProductQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    pub fn category(mut self, category: Category) -> Self {
        self.query.filters.category = Some(category);
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.query.filters.subcategory = Some(subcategory.into());
        self
    }

    /// Inclusive price bounds
    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.query.filters.price_range = Some(ScalarRange::new(min, max));
        self
    }

    pub fn min_sustainability(mut self, score: u8) -> Self {
        self.query.filters.min_sustainability = Some(score);
        self
    }

    pub fn min_rating(mut self, rating: f32) -> Self {
        self.query.filters.min_rating = Some(rating);
        self
    }

    pub fn in_stock(mut self) -> Self {
        self.query.filters.in_stock_only = true;
        self
    }

    pub fn vegan(mut self) -> Self {
        self.query.filters.vegan_only = true;
        self
    }

    pub fn plastic_free(mut self) -> Self {
        self.query.filters.plastic_free_only = true;
        self
    }

    /// Require a certification; repeated calls require all of them.
    pub fn certification(mut self, certification: impl Into<String>) -> Self {
        self.query.filters.certifications.push(certification.into());
        self
    }

    // === Search methods ===

    /// Search all text fields
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = Some(SearchQuery {
            text: text.into(),
            fields: vec![SearchField::All],
        });
        self
    }

    pub fn search_in(
        mut self,
        text: impl Into<String>,
        fields: Vec<SearchField>,
    ) -> Self {
        self.query.search = Some(SearchQuery {
            text: text.into(),
            fields,
        });
        self
    }

    // === Sort methods ===

    pub fn sort_by(mut self, field: SortBy, order: SortOrder) -> Self {
        let secondary = self.query.sort.and_then(|sort| sort.secondary);
        self.query.sort = Some(SortCriteria {
            primary: field,
            order,
            secondary,
        });
        self
    }

    /// Tie-break for the primary sort field. Without a primary field the
    /// query sorts by id ascending first.
    pub fn then_by(mut self, field: SortBy) -> Self {
        let mut sort = self.query.sort.unwrap_or_default();
        sort.secondary = Some(field);
        self.query.sort = Some(sort);
        self
    }

    pub fn greenest_first(self) -> Self {
        self.sort_by(SortBy::SustainabilityScore, SortOrder::Descending)
            .then_by(SortBy::Rating)
    }

    pub fn cheapest_first(self) -> Self {
        self.sort_by(SortBy::Price, SortOrder::Ascending)
    }

    // === Pagination methods ===

    pub fn offset(mut self, offset: usize) -> Self {
        self.query.pagination.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.query.pagination.limit = Some(limit);
        self
    }

    /// Zero-based page of `page_size` records
    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.query.pagination = Pagination {
            offset: page.saturating_mul(page_size),
            limit: Some(page_size),
        };
        self
    }

    pub fn build(self) -> ProductQuery {
        self.query
    }
}
