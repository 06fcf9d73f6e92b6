//! Title catalog: data model, file loading and category grouping.
//!
//! The catalog is read once at startup and never mutated afterward. Rows are
//! derived from it with [`group_by_category`] and handed to the navigation
//! layer.
//!
//! # Module Structure
//!
//! - `types` - `Title` and `CategoryRow`
//! - `loader` - JSON catalog file reader with validation
//! - `grouping` - case/whitespace-insensitive category bucketing

mod grouping;
mod loader;
mod types;

pub use grouping::{group_by_category, normalize_label};
pub use loader::{load, parse_titles, CatalogError};
pub use types::{CategoryRow, Title};

#[cfg(test)]
pub(crate) mod fixtures;
