//! Narrative text interpolated into every generated record.

use ecoscan_model::Category;

pub(crate) fn description(name: &str, brand: &str, category: Category) -> String {
    format!(
        "{name} by {brand} is a sustainable choice in {}. Designed with the \
         planet in mind, it combines everyday performance with responsibly \
         sourced materials.",
        category.label().to_lowercase()
    )
}

pub(crate) fn water_usage(saving_percent: u8) -> String {
    format!("{saving_percent}% less water than conventional alternatives")
}

pub(crate) fn environmental_impact(
    name: &str,
    score: u8,
    co2_saved: &str,
    energy_source: &str,
) -> String {
    format!(
        "{name} scores {score}/100 for sustainability. Choosing it saves \
         roughly {co2_saved} of CO₂ compared to conventional products, and it \
         is manufactured using {}.",
        energy_source.to_lowercase()
    )
}

pub(crate) fn social_impact(
    brand: &str,
    labor_practices: &str,
    origin: &str,
) -> String {
    format!(
        "{brand} sources from {origin}. Labor practices: {}. The supply \
         chain is reviewed for worker safety and fair compensation.",
        labor_practices.to_lowercase()
    )
}

pub(crate) fn economic_impact(price: f64, original_price: f64) -> String {
    if original_price > price {
        format!(
            "Currently priced at ${price:.2}, down from ${original_price:.2}. \
             Durable construction lowers the long-term cost of ownership."
        )
    } else {
        format!(
            "Priced at ${price:.2}. Durable construction lowers the \
             long-term cost of ownership."
        )
    }
}

pub(crate) fn image_url(id: u32) -> String {
    format!("/images/products/{id}.jpg")
}
