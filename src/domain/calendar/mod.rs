//! Calendar table of Daf Yomi cycle segments.

mod catalog;
mod segment;

pub use catalog::{Catalog, CatalogError};
pub use segment::{CycleSegment, ProviderFragments};

#[cfg(test)]
pub(crate) use segment::fixtures;
