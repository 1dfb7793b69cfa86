use crate::cli::{Command, QueryArgs, VocabList};
use anyhow::{Context, Result, anyhow};
use ecoscan_core::{
    Catalog, Category, ProductQueryBuilder, brands, categories, certifications,
    features, materials, origins, subcategories,
};
use ecoscan_model::Product;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use std::path::Path;

/// Run one subcommand against `catalog` and return the JSON to print.
pub fn run(command: Command, catalog: &Catalog) -> Result<Value> {
    let value = match command {
        Command::Generate { output } => write_snapshot(catalog, &output)?,
        Command::Show { id } => {
            let product = catalog
                .get_product_by_id(id)
                .ok_or_else(|| anyhow!("no product with id {id}"))?;
            serde_json::to_value(product)?
        }
        Command::Scan { barcode } => {
            let product = catalog
                .get_product_by_barcode(&barcode)
                .ok_or_else(|| anyhow!("no product with barcode {barcode}"))?;
            serde_json::to_value(product)?
        }
        Command::Search { text, limit } => {
            products(catalog.search_products(&text), limit)?
        }
        Command::Category { category, limit } => products(
            catalog.get_products_by_category(category.as_str()),
            limit,
        )?,
        Command::Subcategory { subcategory, limit } => {
            products(catalog.get_products_by_subcategory(&subcategory), limit)?
        }
        Command::TopRated { limit } => {
            products(catalog.get_top_rated_products(limit), None)?
        }
        Command::Sustainable { limit } => {
            products(catalog.get_most_sustainable_products(limit), None)?
        }
        Command::PriceRange { min, max, limit } => {
            products(catalog.get_products_by_price_range(min, max), limit)?
        }
        Command::Random { count, sample_seed } => {
            let sample = match sample_seed {
                Some(seed) => catalog.get_random_products_with(
                    count,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => catalog.get_random_products(count),
            };
            products(sample, None)?
        }
        Command::Query(args) => query(catalog, args)?,
        Command::Stats => serde_json::to_value(catalog.stats())?,
        Command::Compare { first, second } => {
            let comparison =
                catalog.compare(first, second).ok_or_else(|| {
                    anyhow!("cannot compare {first} and {second}: unknown id")
                })?;
            serde_json::to_value(comparison)?
        }
        Command::Vocab { list, category } => vocab(list, category),
    };
    Ok(value)
}

fn products(mut items: Vec<&Product>, limit: Option<usize>) -> Result<Value> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    Ok(serde_json::to_value(items)?)
}

fn write_snapshot(catalog: &Catalog, output: &Path) -> Result<Value> {
    catalog.write_to_path(output).with_context(|| {
        format!("failed to write snapshot to {}", output.display())
    })?;
    Ok(json!({
        "path": output.display().to_string(),
        "size": catalog.len(),
        "seed": catalog.seed(),
    }))
}

fn query(catalog: &Catalog, args: QueryArgs) -> Result<Value> {
    let mut builder = ProductQueryBuilder::new()
        .offset(args.offset)
        .limit(args.limit);

    if let Some(category) = args.category {
        builder = builder.category(category);
    }
    if let Some(subcategory) = args.subcategory {
        builder = builder.subcategory(subcategory);
    }
    if let Some(text) = args.search {
        builder = builder.search(text);
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        builder = builder.price_range(
            args.min_price.unwrap_or(0.0),
            args.max_price.unwrap_or(f64::MAX),
        );
    }
    if let Some(score) = args.min_score {
        builder = builder.min_sustainability(score);
    }
    if let Some(rating) = args.min_rating {
        builder = builder.min_rating(rating);
    }
    if args.in_stock {
        builder = builder.in_stock();
    }
    if args.vegan {
        builder = builder.vegan();
    }
    if args.plastic_free {
        builder = builder.plastic_free();
    }
    for certification in args.certifications {
        builder = builder.certification(certification);
    }
    if let Some(field) = args.sort {
        builder = builder.sort_by(field.into(), args.order.into());
    }
    if let Some(field) = args.then_by {
        builder = builder.then_by(field.into());
    }

    let page = catalog.query(&builder.build());
    Ok(serde_json::to_value(page)?)
}

fn vocab(list: VocabList, category: Option<Category>) -> Value {
    match list {
        VocabList::Categories => {
            let entries: Vec<Value> = categories()
                .iter()
                .map(|category| {
                    json!({
                        "slug": category.as_str(),
                        "label": category.label(),
                    })
                })
                .collect();
            Value::Array(entries)
        }
        VocabList::Subcategories => {
            json!(category.map(subcategories).unwrap_or_default())
        }
        VocabList::Brands => json!(brands()),
        VocabList::Origins => json!(origins()),
        VocabList::Certifications => json!(certifications()),
        VocabList::Materials => json!(materials()),
        VocabList::Features => json!(features()),
    }
}
