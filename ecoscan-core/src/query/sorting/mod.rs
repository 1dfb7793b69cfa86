//! Ordering of catalog records.
//!
//! Field values are pulled out of a record once as a [`keys::SortKey`] and
//! compared through that key, so every field has a total order (floating
//! point prices included). All sorts here are stable: records that compare
//! equal keep their catalog order.

pub mod keys;
pub mod simple;

pub use keys::SortKey;
pub use simple::{rank_by, sort_products, sort_with_criteria};
