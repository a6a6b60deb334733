//! Keyword lookup over product names.

use stockdeck_catalog::{Catalog, Product};

/// Fixed answer for a query that matches no product name.
pub const NOT_FOUND_ANSWER: &str =
    "Sorry, I couldn't find a matching product in the inventory.";

/// Find the matching record for a raw query.
///
/// Both the query and each candidate name are lower-cased; a candidate
/// matches when its name contains the query as a contiguous substring.
/// The first match in catalog order wins; that tie-break is the only
/// disambiguation rule. The matcher performs no trimming or validation:
/// blank input is the caller's concern.
pub fn find_match<'a>(catalog: &'a Catalog, raw_query: &str) -> Option<&'a Product> {
    let needle = raw_query.to_lowercase();
    catalog
        .products()
        .iter()
        .find(|p| p.product.to_lowercase().contains(&needle))
}

/// Answer a raw query with the fixed textual template.
pub fn answer(catalog: &Catalog, raw_query: &str) -> String {
    match find_match(catalog, raw_query) {
        Some(p) => format!(
            "{}: SKU: {}, Qty: {}, Supplier: {}, Price: ${}",
            p.product, p.sku, p.qty, p.supplier, p.price
        ),
        None => NOT_FOUND_ANSWER.to_string(),
    }
}
