//! Fixed vocabularies the generator draws from.
//!
//! These lists are part of the public surface: consumers that render
//! filters or pickers read them directly instead of deriving them from the
//! generated records.

use ecoscan_model::Category;

/// The 15 top-level categories, in declaration order.
pub fn categories() -> &'static [Category] {
    Category::all()
}

/// Subcategory list for one category.
pub fn subcategories(category: Category) -> &'static [&'static str] {
    category.subcategories()
}

pub fn brands() -> &'static [&'static str] {
    BRANDS
}

pub fn origins() -> &'static [&'static str] {
    ORIGINS
}

pub fn certifications() -> &'static [&'static str] {
    CERTIFICATIONS
}

pub fn materials() -> &'static [&'static str] {
    MATERIALS
}

pub fn features() -> &'static [&'static str] {
    FEATURES
}

pub const BRANDS: &[&str] = &[
    "EcoVita",
    "GreenLeaf",
    "PureEarth",
    "TerraNova",
    "Sustainable Co.",
    "NatureFirst",
    "EarthWise",
    "BioBloom",
    "CleanPlanet",
    "VerdeLife",
    "OceanSafe",
    "Evergreen Goods",
    "Honest Harvest",
    "Kind Threads",
    "Solaris",
    "Rewild",
    "Fernway",
    "Bamboo & Co.",
    "Mossy Stone",
    "Rootbound",
    "Circular Supply",
    "Wildflower",
    "ClearSky",
    "Tidal Works",
    "Seedling",
    "Canopy",
    "Northwind",
    "Sprout Labs",
    "Riverbed",
    "Meadowlark",
    "Zero Waste Co.",
    "Lumen Earth",
    "Grove & Gather",
    "Humble Hemp",
    "Cedar Loop",
    "Sunroot",
    "Blue Harbor",
    "Oak & Acre",
    "Pebble Path",
    "Alder Lane",
];

pub const ORIGINS: &[&str] = &[
    "USA",
    "Canada",
    "Germany",
    "Netherlands",
    "Denmark",
    "Sweden",
    "Portugal",
    "India",
    "Vietnam",
    "Peru",
    "Kenya",
    "New Zealand",
    "Locally sourced",
    "Fair trade cooperative",
];

pub const CERTIFICATIONS: &[&str] = &[
    "USDA Organic",
    "Fair Trade Certified",
    "B Corp",
    "Rainforest Alliance",
    "FSC Certified",
    "Energy Star",
    "Cradle to Cradle",
    "GOTS",
    "OEKO-TEX",
    "Leaping Bunny",
    "Non-GMO Project",
    "Carbon Neutral",
    "1% for the Planet",
    "Climate Neutral",
];

pub const MATERIALS: &[&str] = &[
    "organic cotton",
    "bamboo",
    "recycled plastic",
    "hemp",
    "cork",
    "recycled aluminum",
    "reclaimed wood",
    "glass",
    "stainless steel",
    "natural rubber",
    "linen",
    "recycled paper",
    "plant-based resin",
    "wool",
];

pub const FEATURES: &[&str] = &[
    "biodegradable",
    "compostable",
    "refillable",
    "energy efficient",
    "water saving",
    "zero waste",
    "carbon neutral shipping",
    "repairable",
    "long lasting",
    "non-toxic",
    "locally made",
    "cruelty free",
    "plastic free",
    "modular design",
];

pub const ENERGY_SOURCES: &[&str] = &[
    "100% solar powered",
    "Wind energy",
    "Hydroelectric power",
    "Mixed renewable energy",
    "Geothermal energy",
];

pub const LABOR_PRACTICES: &[&str] = &[
    "Fair trade certified",
    "Living wage guaranteed",
    "Ethically sourced",
    "Worker-owned cooperative",
    "Audited supply chain",
];

/// Ladder of carbon savings figures a record can claim.
pub const CO2_SAVED: &[&str] = &[
    "0.5 kg", "1.2 kg", "2.5 kg", "3.8 kg", "5.0 kg", "7.5 kg", "10.0 kg",
];

pub const PACKAGING_TYPES: &[&str] = &[
    "Recycled cardboard",
    "Compostable pouch",
    "Glass jar",
    "Minimal paper wrap",
    "Reusable container",
];

pub const VARIANTS: &[&str] = &[
    "Premium",
    "Deluxe",
    "Classic",
    "Essential",
    "Pro",
    "Natural",
    "Ultra",
    "Everyday",
];

pub const ALTERNATIVE_REASONS: &[&str] = &[
    "Uses more recycled materials",
    "Lower carbon footprint",
    "Plastic-free packaging",
    "Locally manufactured",
    "Longer product lifespan",
];

pub const PRICE_COMPARISONS: &[&str] = &[
    "Similar price",
    "10% cheaper",
    "15% more expensive",
    "20% cheaper",
    "5% more expensive",
];

/// Identical for every record.
pub const RECOMMENDATIONS: &[&str] = &[
    "Choose products with minimal packaging",
    "Look for third-party sustainability certifications",
    "Consider the full product lifecycle before buying",
    "Support brands with transparent supply chains",
];

pub const GENERIC_NAMES: &[&str] = &[
    "Eco Essentials Kit",
    "Green Living Set",
    "Sustainable Starter Pack",
    "Earth Friendly Bundle",
    "Conscious Choice Set",
];

pub const INGREDIENTS: &[&str] = &[
    "Organic oats, coconut sugar, sea salt",
    "Fair trade cacao, cane sugar, vanilla",
    "Filtered water, organic green tea, lemon",
    "Almonds, dates, sunflower seeds",
    "Organic coffee beans",
];

/// Curated base names per category. Categories without an entry use
/// [`GENERIC_NAMES`].
pub fn curated_names(category: Category) -> Option<&'static [&'static str]> {
    let names: &'static [&'static str] = match category {
        Category::Electronics => &[
            "Solar Charger",
            "Bamboo Wireless Earbuds",
            "Recycled Phone Case",
            "Energy Saving Smart Plug",
            "Refurbished Laptop",
        ],
        Category::Clothing => &[
            "Organic Cotton T-Shirt",
            "Hemp Denim Jeans",
            "Recycled Fleece Jacket",
            "Linen Summer Dress",
            "Merino Wool Socks",
        ],
        Category::FoodBeverages => &[
            "Organic Granola",
            "Fair Trade Dark Chocolate",
            "Cold Brew Green Tea",
            "Oat Milk",
            "Single Origin Coffee",
        ],
        Category::HomeGarden => &[
            "Bamboo Cutting Board",
            "Beeswax Food Wraps",
            "Reclaimed Wood Shelf",
            "Organic Cotton Sheets",
            "Compost Bin",
        ],
        Category::BeautyPersonalCare => &[
            "Shampoo Bar",
            "Bamboo Toothbrush",
            "Refillable Deodorant",
            "Natural Face Serum",
            "Plastic-Free Lip Balm",
        ],
        Category::SportsOutdoors => &[
            "Cork Yoga Mat",
            "Stainless Water Bottle",
            "Recycled Hiking Backpack",
            "Organic Cotton Gym Towel",
        ],
        Category::ToysGames => &[
            "Wooden Building Blocks",
            "Recycled Cardboard Puzzle",
            "Organic Plush Bear",
        ],
        Category::CleaningSupplies => &[
            "Refillable Dish Soap",
            "Laundry Detergent Sheets",
            "Compostable Sponges",
            "All-Purpose Cleaner Concentrate",
        ],
        _ => return None,
    };
    Some(names)
}
