//! Filter engine: criteria, predicate composition, and CSV export.
//!
//! Everything here is a pure function over the catalog plus a transient
//! `Criteria` value — no state, no side effects. An empty result is a
//! normal outcome, never an error.

pub mod criteria;
pub mod export;
pub mod filter;

pub use criteria::{Criteria, Facet, ALL};
pub use export::{to_csv, EXPORT_FILENAME};
pub use filter::{apply, category_options, supplier_options};
