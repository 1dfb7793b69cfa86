use ecoscan_model::{Category, Product};
use serde::{Deserialize, Serialize};

/// Composable catalog query: filters, optional text search, ordering and
/// pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub filters: ProductFilters,
    pub search: Option<SearchQuery>,
    pub sort: Option<SortCriteria>,
    pub pagination: Pagination,
}

/// Product filtering options. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilters {
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub price_range: Option<ScalarRange<f64>>,
    pub min_sustainability: Option<u8>,
    pub min_rating: Option<f32>,
    pub in_stock_only: bool,
    pub vegan_only: bool,
    pub plastic_free_only: bool,
    /// Every listed certification must be present (case-insensitive).
    pub certifications: Vec<String>,
}

/// Inclusive range on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> ScalarRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd> ScalarRange<T> {
    pub fn contains(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }
}

/// Sort criteria for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub primary: SortBy,
    pub order: SortOrder,
    /// Tie-break applied in the same order as the primary field.
    pub secondary: Option<SortBy>,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            primary: SortBy::Id,
            order: SortOrder::Ascending,
            secondary: None,
        }
    }
}

/// Fields available for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Id,
    Name,
    Price,
    Rating,
    Reviews,
    SustainabilityScore,
    Discount,
}

impl SortBy {
    pub fn all() -> &'static [SortBy] {
        use SortBy::*;
        &[Id, Name, Price, Rating, Reviews, SustainabilityScore, Discount]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Name => "name",
            SortBy::Price => "price",
            SortBy::Rating => "rating",
            SortBy::Reviews => "reviews",
            SortBy::SustainabilityScore => "sustainability_score",
            SortBy::Discount => "discount",
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Search query options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub fields: Vec<SearchField>,
}

/// Fields to search in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Brand,
    Description,
    Features,
    Materials,
    All,
}

/// Pagination options. `limit: None` returns everything after `offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub offset: usize,
    pub limit: Option<usize>,
}

/// One page of query results plus the number of records that matched
/// before pagination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPage<'a> {
    pub total: usize,
    pub offset: usize,
    pub items: Vec<&'a Product>,
}

impl QueryPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }
}
