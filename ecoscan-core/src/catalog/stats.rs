//! Catalog-wide aggregates.

use ecoscan_model::{Category, Product};
use serde::Serialize;

/// Per-category breakdown. Averages are `0.0` for an empty category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: Category,
    pub count: usize,
    pub average_price: f64,
    pub average_rating: f64,
    pub average_score: f64,
    pub vegan_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock_ratio: f64,
    pub vegan_ratio: f64,
    pub average_price: f64,
    pub average_score: f64,
    /// One entry per category, in [`Category::all`] order.
    pub categories: Vec<CategoryStats>,
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    price: f64,
    rating: f64,
    score: f64,
    vegan: usize,
    in_stock: usize,
}

impl Accumulator {
    fn add(&mut self, product: &Product) {
        self.count += 1;
        self.price += product.price;
        self.rating += f64::from(product.rating.value());
        self.score += f64::from(product.sustainability_score.value());
        self.vegan += usize::from(product.vegan);
        self.in_stock += usize::from(product.in_stock);
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            sum / self.count as f64
        }
    }

    fn share(&self, hits: usize) -> f64 {
        self.mean(hits as f64)
    }
}

impl CatalogStats {
    pub fn collect(products: &[Product]) -> Self {
        let categories = Category::all();
        let mut overall = Accumulator::default();
        let mut per_category: Vec<Accumulator> =
            categories.iter().map(|_| Accumulator::default()).collect();

        for product in products {
            overall.add(product);
            if let Some(slot) = categories
                .iter()
                .position(|category| *category == product.category)
            {
                per_category[slot].add(product);
            }
        }

        Self {
            total: overall.count,
            in_stock_ratio: overall.share(overall.in_stock),
            vegan_ratio: overall.share(overall.vegan),
            average_price: overall.mean(overall.price),
            average_score: overall.mean(overall.score),
            categories: categories
                .iter()
                .zip(per_category)
                .map(|(category, acc)| CategoryStats {
                    category: *category,
                    count: acc.count,
                    average_price: acc.mean(acc.price),
                    average_rating: acc.mean(acc.rating),
                    average_score: acc.mean(acc.score),
                    vegan_share: acc.share(acc.vegan),
                })
                .collect(),
        }
    }

    pub fn category(&self, category: Category) -> Option<&CategoryStats> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
    }
}
