//! Free-text search over the library.
//!
//! `matcher` holds the field-level text rules, `catalog` applies them to
//! playlist and song collections.

mod catalog;
mod matcher;

pub use catalog::{SearchQuery, SearchResults, filter};
