//! CSV serialization of a filtered view.

use stockdeck_catalog::Product;
use stockdeck_core::{DomainError, DomainResult};

/// Download name of the exported artifact.
pub const EXPORT_FILENAME: &str = "inventory.csv";

/// Header row, matching the record's canonical attribute order.
const HEADER: [&str; 7] = [
    "SKU",
    "Product",
    "Category",
    "Qty",
    "MinStock",
    "Price",
    "Supplier",
];

/// Serialize the rows to CSV: one header row, one line per record in the
/// given order. Byte-stable for a given input.
pub fn to_csv(rows: &[Product]) -> DomainResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| DomainError::serialization(e.to_string()))?;

    for p in rows {
        writer
            .write_record([
                p.sku.as_str(),
                &p.product,
                &p.category,
                &p.qty.to_string(),
                &p.min_stock.to_string(),
                &p.price.to_string(),
                &p.supplier,
            ])
            .map_err(|e| DomainError::serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::serialization(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| DomainError::serialization(e.to_string()))
}
