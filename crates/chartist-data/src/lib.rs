//! Price loaders for chart analysis.
//!
//! Implementations of the [`chartist_core::traits::PriceSource`] contract:
//! a CSV-backed daily close loader and a read-through caching wrapper.

mod cache;
mod csv_source;

pub use cache::CachedSource;
pub use csv_source::CsvPriceSource;
