//! Synthetic product generation.
//!
//! Every draw goes through an explicit, seeded PRNG so a catalog can be
//! reproduced exactly from [`GeneratorOptions::seed`].

pub mod config;
mod templates;

pub use config::{DEFAULT_CATALOG_SIZE, GeneratorOptions};

use crate::catalog::vocabulary::{
    ALTERNATIVE_REASONS, BRANDS, CERTIFICATIONS, CO2_SAVED, ENERGY_SOURCES,
    FEATURES, GENERIC_NAMES, INGREDIENTS, LABOR_PRACTICES, MATERIALS,
    ORIGINS, PACKAGING_TYPES, PRICE_COMPARISONS, RECOMMENDATIONS, VARIANTS,
    curated_names,
};
use crate::error::Result;
use ecoscan_model::{
    Alternative, CarbonFootprint, Category, DetailedAnalysis, NutritionFacts,
    Packaging, Product, ProductId, Rating, SustainabilityScore,
    numbers::round_cents,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

const MATERIAL_COUNT: RangeInclusive<usize> = 1..=3;
const FEATURE_COUNT: RangeInclusive<usize> = 3..=8;
const CERTIFICATION_COUNT: RangeInclusive<usize> = 1..=4;

/// Stateful generator holding the PRNG for one generation pass.
#[derive(Debug)]
pub struct ProductGenerator {
    rng: StdRng,
    seed: u64,
    options: GeneratorOptions,
}

impl ProductGenerator {
    /// Build a generator from validated options. A missing seed is replaced
    /// by a fresh random one, observable through [`ProductGenerator::seed`].
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        options.validate()?;
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            options,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Synthesize one fully populated record for `id`.
    pub fn generate_product(&mut self, id: impl Into<ProductId>) -> Product {
        synthesize(&mut self.rng, id.into(), &self.options)
    }

    /// Synthesize records for ids `1..=options.size` in order.
    pub fn generate_all(&mut self) -> Vec<Product> {
        let size = self.options.size as u32;
        (1..=size).map(|id| self.generate_product(id)).collect()
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Shuffle a copy of `source` and keep a random-length prefix, so the
/// result never repeats an entry.
fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    source: &[&str],
    count: RangeInclusive<usize>,
) -> Vec<String> {
    let mut pool = source.to_vec();
    pool.shuffle(rng);
    let len = rng.random_range(count).min(pool.len());
    pool.into_iter().take(len).map(str::to_string).collect()
}

fn base_name<R: Rng + ?Sized>(rng: &mut R, category: Category) -> &'static str {
    let names = curated_names(category).unwrap_or(GENERIC_NAMES);
    pick(rng, names)
}

fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    id: ProductId,
    options: &GeneratorOptions,
) -> Product {
    let categories = Category::all();
    let category = categories[rng.random_range(0..categories.len())];
    let subcategory = pick(rng, category.subcategories()).to_string();
    let brand = pick(rng, BRANDS).to_string();
    let base = base_name(rng, category);
    let name = format!("{} {}", pick(rng, VARIANTS), base);

    let (min_price, max_price) = options.price_range;
    let price = round_cents(rng.random_range(min_price..max_price));
    let markup = rng.random_range(0.0..=options.max_markup);
    let original_price = round_cents(price * (1.0 + markup)).max(price);
    let rating = Rating::saturating_tenths(
        rng.random_range(Rating::MIN_TENTHS..=Rating::MAX_TENTHS),
    );
    let reviews = rng.random_range(10..=5_000);
    let in_stock = rng.random_bool(0.9);
    let fast_shipping = rng.random_bool(0.7);

    let sustainability_score = SustainabilityScore::saturating(
        rng.random_range(SustainabilityScore::MIN..=SustainabilityScore::MAX),
    );
    let co2_saved = pick(rng, CO2_SAVED).to_string();
    let water_usage = templates::water_usage(rng.random_range(20..=80));
    let energy_source = pick(rng, ENERGY_SOURCES).to_string();
    let labor_practices = pick(rng, LABOR_PRACTICES).to_string();
    let animal_testing = rng.random_bool(0.1);
    let vegan = rng.random_bool(0.7);

    let materials = sample_distinct(rng, MATERIALS, MATERIAL_COUNT);
    let features = sample_distinct(rng, FEATURES, FEATURE_COUNT);
    let certifications =
        sample_distinct(rng, CERTIFICATIONS, CERTIFICATION_COUNT);
    let origin = pick(rng, ORIGINS).to_string();

    let packaging = Packaging {
        kind: pick(rng, PACKAGING_TYPES).to_string(),
        recyclable: rng.random_bool(0.8),
        biodegradable: rng.random_bool(0.6),
        plastic_free: rng.random_bool(0.7),
    };

    let carbon_footprint = CarbonFootprint {
        production: CarbonFootprint::format_kg(rng.random_range(0.5..5.0)),
        transport: CarbonFootprint::format_kg(rng.random_range(0.1..2.0)),
        total: CarbonFootprint::format_kg(rng.random_range(1.0..8.0)),
    };

    let (ingredients, nutrition_facts) = if category.is_food() {
        (
            Some(pick(rng, INGREDIENTS).to_string()),
            Some(NutritionFacts {
                calories: rng.random_range(50..=400),
                protein: format!("{}g", rng.random_range(0..=20u8)),
                carbs: format!("{}g", rng.random_range(5..=60u8)),
                fat: format!("{}g", rng.random_range(0..=25u8)),
                fiber: format!("{}g", rng.random_range(0..=10u8)),
            }),
        )
    } else {
        (None, None)
    };

    let alternatives = [
        alternative(rng, base, sustainability_score),
        alternative(rng, base, sustainability_score),
    ];

    let barcode = format!(
        "{:06}{:07}",
        id.value(),
        rng.random_range(0..10_000_000u32)
    );
    let description = templates::description(&name, &brand, category);
    let detailed_analysis = DetailedAnalysis {
        environmental_impact: templates::environmental_impact(
            &name,
            sustainability_score.value(),
            &co2_saved,
            &energy_source,
        ),
        social_impact: templates::social_impact(
            &brand,
            &labor_practices,
            &origin,
        ),
        economic_impact: templates::economic_impact(price, original_price),
        recommendations: RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
    };

    Product {
        id,
        name,
        brand,
        barcode,
        price,
        original_price,
        rating,
        reviews,
        in_stock,
        fast_shipping,
        category,
        subcategory,
        sustainability_score,
        co2_saved,
        water_usage,
        energy_source,
        labor_practices,
        animal_testing,
        vegan,
        materials,
        features,
        certifications,
        origin,
        packaging,
        carbon_footprint,
        ingredients,
        nutrition_facts,
        alternatives,
        description,
        detailed_analysis,
        image: templates::image_url(id.value()),
    }
}

/// Competitor summary whose score sits within -5..=+10 of the base score.
fn alternative<R: Rng + ?Sized>(
    rng: &mut R,
    base: &str,
    score: SustainabilityScore,
) -> Alternative {
    let offset: i16 = rng.random_range(-5..=10);
    let alt_score = (score.value() as i16 + offset).clamp(0, 100) as u8;
    Alternative {
        name: format!("{} {}", pick(rng, BRANDS), base),
        sustainability_score: alt_score,
        reason: pick(rng, ALTERNATIVE_REASONS).to_string(),
        price_comparison: pick(rng, PRICE_COMPARISONS).to_string(),
    }
}
