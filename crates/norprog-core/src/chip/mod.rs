//! Flash chip descriptors and the chip catalog
//!
//! The catalog is an ordered, immutable list of [`ChipDescriptor`]s. A
//! built-in table covers a few hundred parts; with the `std` feature more can
//! be appended from RON files.

mod catalog;
mod table;
mod types;

#[cfg(feature = "std")]
mod database;

pub use catalog::{Catalog, IdMatch, RawId};
pub use types::*;

#[cfg(feature = "std")]
pub use database::*;
