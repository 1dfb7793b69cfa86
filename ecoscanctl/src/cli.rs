use clap::{Args, Parser, Subcommand, ValueEnum};
use ecoscan_core::{Category, SortBy, SortOrder};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ecoscanctl",
    version,
    about = "Generate and query the EcoScan synthetic product catalog"
)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the catalog comes from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Generator seed; overrides the configured seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Number of records to generate; overrides the configured size
    #[arg(long, global = true)]
    pub size: Option<usize>,
    /// Load a catalog snapshot instead of generating one
    #[arg(long, global = true, conflicts_with_all = ["seed", "size"])]
    pub snapshot: Option<PathBuf>,
    /// Config file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Write compact JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a catalog and write it as a JSON snapshot
    Generate {
        #[arg(long, short, default_value = "catalog.json")]
        output: PathBuf,
    },
    /// Show one product by id
    Show { id: u32 },
    /// Resolve a scanned barcode to a product
    Scan { barcode: String },
    /// Case-insensitive search over names, brands, descriptions, features
    /// and materials
    Search {
        text: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Products in one category, by slug (e.g. food-beverages)
    Category {
        #[arg(value_parser = parse_category)]
        category: Category,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Products in one subcategory, across categories
    Subcategory {
        subcategory: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Highest rated products
    TopRated {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Highest sustainability scores
    Sustainable {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Products priced within [min, max]
    PriceRange {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Random distinct products
    Random {
        count: usize,
        /// Seed for the sampling order
        #[arg(long)]
        sample_seed: Option<u64>,
    },
    /// Filter, sort and paginate the catalog
    Query(QueryArgs),
    /// Catalog totals and per-category averages
    Stats,
    /// Compare two products by id
    Compare { first: u32, second: u32 },
    /// Print one of the fixed vocabularies
    Vocab {
        #[arg(value_enum)]
        list: VocabList,
        /// Category for the subcategories list
        #[arg(
            long,
            value_parser = parse_category,
            required_if_eq("list", "subcategories")
        )]
        category: Option<Category>,
    },
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,
    #[arg(long)]
    pub subcategory: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    #[arg(long)]
    pub min_score: Option<u8>,
    #[arg(long)]
    pub min_rating: Option<f32>,
    #[arg(long)]
    pub in_stock: bool,
    #[arg(long)]
    pub vegan: bool,
    #[arg(long)]
    pub plastic_free: bool,
    /// Required certification; repeat to require several
    #[arg(long = "certification")]
    pub certifications: Vec<String>,
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,
    #[arg(long, value_enum, default_value = "asc")]
    pub order: OrderArg,
    #[arg(long, value_enum)]
    pub then_by: Option<SortField>,
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VocabList {
    Categories,
    Subcategories,
    Brands,
    Origins,
    Certifications,
    Materials,
    Features,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortField {
    Id,
    Name,
    Price,
    Rating,
    Reviews,
    Score,
    Discount,
}

impl From<SortField> for SortBy {
    fn from(value: SortField) -> Self {
        match value {
            SortField::Id => SortBy::Id,
            SortField::Name => SortBy::Name,
            SortField::Price => SortBy::Price,
            SortField::Rating => SortBy::Rating,
            SortField::Reviews => SortBy::Reviews,
            SortField::Score => SortBy::SustainabilityScore,
            SortField::Discount => SortBy::Discount,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse::<Category>().map_err(|err| err.to_string())
}
