//! Intent catalog and tag-keyed response selection.

pub mod catalog;
pub mod selector;

pub use catalog::{IntentCatalog, IntentEntry};
pub use selector::{select_with, ResponseSelector};
