use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Top-level product category. The slug is the canonical string form used
/// by queries and serialized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    Electronics,
    Clothing,
    FoodBeverages,
    HomeGarden,
    BeautyPersonalCare,
    SportsOutdoors,
    ToysGames,
    BooksMedia,
    HealthWellness,
    Automotive,
    OfficeSupplies,
    PetSupplies,
    BabyKids,
    JewelryAccessories,
    CleaningSupplies,
}

impl Category {
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[
            Electronics,
            Clothing,
            FoodBeverages,
            HomeGarden,
            BeautyPersonalCare,
            SportsOutdoors,
            ToysGames,
            BooksMedia,
            HealthWellness,
            Automotive,
            OfficeSupplies,
            PetSupplies,
            BabyKids,
            JewelryAccessories,
            CleaningSupplies,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::FoodBeverages => "food-beverages",
            Category::HomeGarden => "home-garden",
            Category::BeautyPersonalCare => "beauty-personal-care",
            Category::SportsOutdoors => "sports-outdoors",
            Category::ToysGames => "toys-games",
            Category::BooksMedia => "books-media",
            Category::HealthWellness => "health-wellness",
            Category::Automotive => "automotive",
            Category::OfficeSupplies => "office-supplies",
            Category::PetSupplies => "pet-supplies",
            Category::BabyKids => "baby-kids",
            Category::JewelryAccessories => "jewelry-accessories",
            Category::CleaningSupplies => "cleaning-supplies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::FoodBeverages => "Food & Beverages",
            Category::HomeGarden => "Home & Garden",
            Category::BeautyPersonalCare => "Beauty & Personal Care",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::ToysGames => "Toys & Games",
            Category::BooksMedia => "Books & Media",
            Category::HealthWellness => "Health & Wellness",
            Category::Automotive => "Automotive",
            Category::OfficeSupplies => "Office Supplies",
            Category::PetSupplies => "Pet Supplies",
            Category::BabyKids => "Baby & Kids",
            Category::JewelryAccessories => "Jewelry & Accessories",
            Category::CleaningSupplies => "Cleaning Supplies",
        }
    }

    /// Fixed subcategory list for this category. A record's subcategory is
    /// always drawn from here.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &[
                "smartphones",
                "laptops",
                "headphones",
                "chargers",
                "smart-home",
                "wearables",
            ],
            Category::Clothing => &[
                "t-shirts",
                "jeans",
                "jackets",
                "dresses",
                "activewear",
                "underwear",
            ],
            Category::FoodBeverages => &[
                "snacks",
                "beverages",
                "coffee-tea",
                "pantry",
                "dairy-alternatives",
                "chocolate",
            ],
            Category::HomeGarden => &[
                "furniture",
                "bedding",
                "kitchenware",
                "decor",
                "gardening",
                "lighting",
            ],
            Category::BeautyPersonalCare => &[
                "skincare",
                "haircare",
                "makeup",
                "oral-care",
                "fragrance",
                "bath-body",
            ],
            Category::SportsOutdoors => &[
                "yoga",
                "camping",
                "cycling",
                "running",
                "water-bottles",
                "fitness-equipment",
            ],
            Category::ToysGames => &[
                "wooden-toys",
                "puzzles",
                "board-games",
                "plush",
                "building-sets",
                "outdoor-play",
            ],
            Category::BooksMedia => &[
                "books",
                "magazines",
                "notebooks",
                "audiobooks",
                "music",
            ],
            Category::HealthWellness => &[
                "supplements",
                "vitamins",
                "first-aid",
                "essential-oils",
                "sleep",
            ],
            Category::Automotive => &[
                "car-care",
                "accessories",
                "tires",
                "ev-charging",
                "cleaning",
            ],
            Category::OfficeSupplies => &[
                "paper",
                "pens",
                "desk-organizers",
                "printer-supplies",
                "bags",
            ],
            Category::PetSupplies => &[
                "pet-food",
                "pet-toys",
                "pet-beds",
                "grooming",
                "leashes-collars",
            ],
            Category::BabyKids => &[
                "diapers",
                "baby-clothing",
                "feeding",
                "nursery",
                "strollers",
            ],
            Category::JewelryAccessories => &[
                "necklaces",
                "rings",
                "bracelets",
                "watches",
                "sunglasses",
                "wallets",
            ],
            Category::CleaningSupplies => &[
                "detergents",
                "surface-cleaners",
                "sponges-cloths",
                "dish-soap",
                "trash-bags",
            ],
        }
    }

    /// Food-specific fields (ingredients, nutrition facts) are only populated
    /// for this category.
    pub fn is_food(&self) -> bool {
        matches!(self, Category::FoodBeverages)
    }

    pub fn has_subcategory(&self, subcategory: &str) -> bool {
        self.subcategories().contains(&subcategory)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
