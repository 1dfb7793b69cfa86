use super::*;
use crate::query::ProductQueryBuilder;
use crate::test_support::{product, with_rating, with_score};
use ecoscan_model::Category;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixture() -> Catalog {
    let mut solar = with_score(
        with_rating(product(1, "Solar Charger", 49.99), 47),
        92,
    );
    solar.category = Category::Electronics;
    solar.subcategory = "Chargers".into();
    solar.brand = "SunCycle".into();
    solar.materials = vec!["Recycled Aluminum".into()];
    solar.features = vec!["Water Resistant".into()];
    solar.description = "Portable charging".into();
    solar.barcode = "0000011234567".into();

    let mut granola = with_score(
        with_rating(product(2, "Organic Granola", 8.5), 41),
        75,
    );
    granola.category = Category::FoodBeverages;
    granola.subcategory = "Snacks".into();
    granola.brand = "EcoVita".into();
    granola.materials = vec!["Paper".into()];
    granola.features = vec!["Gluten Free".into()];
    granola.description = "Crunchy breakfast".into();
    granola.barcode = "0000027654321".into();

    let mut sheets = with_score(
        with_rating(product(3, "Organic Cotton Sheets", 120.0), 47),
        99,
    );
    sheets.category = Category::HomeGarden;
    sheets.subcategory = "Snacks".into();
    sheets.brand = "PureNest".into();
    sheets.materials = vec!["Organic Cotton".into()];
    sheets.features = vec!["Hypoallergenic".into()];
    sheets.description = "Soft bedding".into();
    sheets.barcode = "0000030000001".into();

    Catalog::from_products(vec![solar, granola, sheets])
}

fn ids(items: &[&Product]) -> Vec<u32> {
    items.iter().map(|p| p.id.value()).collect()
}

#[test]
fn lookup_by_id_and_barcode() {
    let catalog = fixture();
    assert_eq!(catalog.get_product_by_id(2u32).map(|p| p.id.value()), Some(2));
    assert!(catalog.get_product_by_id(0u32).is_none());
    assert!(catalog.get_product_by_id(999_999u32).is_none());

    let scanned = catalog.get_product_by_barcode(" 0000027654321\n");
    assert_eq!(scanned.map(|p| p.id.value()), Some(2));
    assert!(catalog.get_product_by_barcode("123").is_none());
}

#[test]
fn lookup_by_id_survives_reordered_records() {
    let mut products = fixture().products().to_vec();
    products.reverse();
    let catalog = Catalog::from_products(products);
    assert_eq!(catalog.get_product_by_id(1u32).map(|p| p.id.value()), Some(1));
    assert_eq!(catalog.get_product_by_id(3u32).map(|p| p.id.value()), Some(3));
}

#[test]
fn category_and_subcategory_are_exact() {
    let catalog = fixture();
    assert_eq!(ids(&catalog.get_products_by_category("electronics")), vec![1]);
    assert!(catalog.get_products_by_category("Electronics").is_empty());
    assert!(catalog.get_products_by_category("gadgets").is_empty());

    // Subcategory does not constrain the category.
    assert_eq!(
        ids(&catalog.get_products_by_subcategory("Snacks")),
        vec![2, 3]
    );
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let catalog = fixture();
    assert_eq!(ids(&catalog.search_products("ORGANIC")), vec![2, 3]);
    assert_eq!(ids(&catalog.search_products("suncycle")), vec![1]);
    assert_eq!(ids(&catalog.search_products("breakfast")), vec![2]);
    assert_eq!(ids(&catalog.search_products("gluten")), vec![2]);
    assert_eq!(ids(&catalog.search_products("aluminum")), vec![1]);
    assert_eq!(catalog.search_products("").len(), 3);
    assert!(catalog.search_products("xyzzy-nothing").is_empty());
}

#[test]
fn rankings_default_and_truncate() {
    let catalog = fixture();
    assert_eq!(ids(&catalog.get_top_rated_products(None)), vec![1, 3, 2]);
    assert_eq!(ids(&catalog.get_top_rated_products(Some(1))), vec![1]);
    assert!(catalog.get_top_rated_products(Some(0)).is_empty());
    assert_eq!(
        ids(&catalog.get_most_sustainable_products(Some(2))),
        vec![3, 1]
    );
}

#[test]
fn price_range_is_inclusive() {
    let catalog = fixture();
    assert_eq!(
        ids(&catalog.get_products_by_price_range(8.5, 49.99)),
        vec![1, 2]
    );
    assert!(catalog.get_products_by_price_range(200.0, 10.0).is_empty());
}

#[test]
fn random_sample_is_distinct_and_bounded() {
    let catalog = fixture();
    let mut rng = StdRng::seed_from_u64(3);

    let sample = catalog.get_random_products_with(2, &mut rng);
    assert_eq!(sample.len(), 2);
    assert_ne!(sample[0].id, sample[1].id);

    let everything = catalog.get_random_products_with(10, &mut rng);
    let mut seen = ids(&everything);
    seen.sort();
    assert_eq!(seen, vec![1, 2, 3]);

    assert!(catalog.get_random_products(0).is_empty());
}

#[test]
fn sorted_view_leaves_catalog_untouched() {
    let catalog = fixture();
    let by_price = catalog.sorted_by(SortBy::Price, SortOrder::Descending);
    assert_eq!(ids(&by_price), vec![3, 1, 2]);
    assert_eq!(catalog.products()[0].id.value(), 1);
}

#[test]
fn query_filters_sorts_and_pages() {
    let catalog = fixture();
    let query = ProductQueryBuilder::new()
        .search("organic")
        .cheapest_first()
        .build();
    let page = catalog.query(&query);
    assert_eq!(page.total, 2);
    assert_eq!(ids(&page.items), vec![2, 3]);

    let query = ProductQueryBuilder::new()
        .min_sustainability(90)
        .sort_by(SortBy::Rating, SortOrder::Descending)
        .then_by(SortBy::Price)
        .limit(1)
        .build();
    let page = catalog.query(&query);
    assert_eq!(page.total, 2);
    assert_eq!(ids(&page.items), vec![3]);
    assert!(page.has_more());

    let page = catalog.query(&ProductQueryBuilder::new().offset(10).build());
    assert_eq!(page.total, 3);
    assert!(page.is_empty());
}

#[test]
fn compare_needs_both_ids() {
    let catalog = fixture();
    let comparison = catalog.compare(1u32, 3u32).unwrap();
    assert_eq!(comparison.greener, Some(ProductId(3)));
    assert!(catalog.compare(1u32, 42u32).is_none());
}

#[test]
fn generate_records_seed() {
    let options = GeneratorOptions::with_seed(99).size(10);
    let catalog = Catalog::generate(&options).unwrap();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.seed(), Some(99));
    assert_eq!(catalog, Catalog::generate(&options).unwrap());
}

#[test]
fn shared_slot_installs_once() {
    let options = GeneratorOptions::with_seed(5).size(4);
    let first = shared_or_generate(&options).unwrap();
    assert!(std::ptr::eq(first, shared().unwrap()));

    let again = shared_or_generate(&GeneratorOptions::with_seed(6)).unwrap();
    assert!(std::ptr::eq(first, again));

    let err = install_shared(Catalog::from_products(Vec::new())).unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyInstalled));
}
