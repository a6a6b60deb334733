//! Catalog domain module.
//!
//! This crate owns the product table: a fixed, compiled-in catalog that is
//! immutable for the process lifetime, plus the derived summary the
//! dashboard renders (metric cards and chart series). No IO, no HTTP, no
//! storage.

pub mod product;
pub mod store;

pub use product::{Product, Sku};
pub use store::{Catalog, CatalogSummary, StockLevel, SupplierUnits};
