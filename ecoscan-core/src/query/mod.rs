pub mod builder;
pub mod executor;
pub mod filtering;
pub mod sorting;
pub mod types;

pub use builder::ProductQueryBuilder;
pub use executor::execute;
pub use sorting::*;
pub use types::*;
