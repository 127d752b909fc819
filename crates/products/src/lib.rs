//! Products domain module.
//!
//! This crate contains the product record and the bounded store catalog,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod config;
pub mod product;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use product::Product;
