//! Catalog store: the process-wide product table and its derived summary.

use serde::Serialize;

use crate::product::Product;

/// Ordered, read-only sequence of products. Insertion order is the
/// canonical display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog.
    ///
    /// Idempotent and deterministic: the rows are a compiled-in literal, so
    /// every call yields the same catalog and there is no failure path.
    pub fn load() -> Self {
        Self {
            products: vec![
                Product::new("A101", "iPhone 15", "Mobile", 12, 15, 999.0, "ABC"),
                Product::new("B202", "Galaxy S24", "Mobile", 30, 10, 899.0, "XYZ"),
                Product::new("C303", "MacBook Air M3", "Laptop", 5, 8, 1299.0, "ABC"),
                Product::new("D404", "Dell XPS 13", "Laptop", 9, 6, 1099.0, "XYZ"),
                Product::new("E505", "Logitech Mouse", "Accessory", 3, 5, 29.0, "ACC"),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Derive the dashboard summary: metric cards plus both chart series.
    pub fn summary(&self) -> CatalogSummary {
        let low_stock = self
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .count();

        let mut units_by_supplier: Vec<SupplierUnits> = Vec::new();
        for p in &self.products {
            match units_by_supplier.iter_mut().find(|s| s.supplier == p.supplier) {
                Some(entry) => entry.units += u64::from(p.qty),
                None => units_by_supplier.push(SupplierUnits {
                    supplier: p.supplier.clone(),
                    units: u64::from(p.qty),
                }),
            }
        }

        CatalogSummary {
            total_products: self.products.len(),
            total_units: self.products.iter().map(|p| u64::from(p.qty)).sum(),
            low_stock,
            // The dashboard shows both cards computed from the same
            // expression (qty < min_stock). Kept identical on purpose;
            // see DESIGN.md.
            reorder_needed: low_stock,
            units_by_supplier,
            stock_levels: self
                .products
                .iter()
                .map(|p| StockLevel {
                    product: p.product.clone(),
                    qty: p.qty,
                    min_stock: p.min_stock,
                })
                .collect(),
        }
    }
}

/// Derived metrics consumed by the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Metric card: number of catalog rows.
    pub total_products: usize,
    /// Metric card: units in stock, summed across all records.
    pub total_units: u64,
    /// Metric card: records with `qty < min_stock`.
    pub low_stock: usize,
    /// Metric card: same expression as `low_stock`.
    pub reorder_needed: usize,
    /// Chart series: units grouped by supplier, first-appearance order.
    pub units_by_supplier: Vec<SupplierUnits>,
    /// Chart series: per-product stock level vs. reorder threshold,
    /// catalog order.
    pub stock_levels: Vec<StockLevel>,
}

/// One bar of the units-by-supplier chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierUnits {
    pub supplier: String,
    pub units: u64,
}

/// One bar of the stock-level chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub product: String,
    pub qty: u32,
    pub min_stock: u32,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn load_is_deterministic_and_idempotent() {
        assert_eq!(Catalog::load(), Catalog::load());
        assert_eq!(Catalog::load().len(), 5);
    }

    #[test]
    fn skus_are_unique() {
        let catalog = Catalog::load();
        let skus: HashSet<_> = catalog.products().iter().map(|p| &p.sku).collect();
        assert_eq!(skus.len(), catalog.len());
    }

    #[test]
    fn summary_metric_cards() {
        let summary = Catalog::load().summary();
        assert_eq!(summary.total_products, 5);
        assert_eq!(summary.total_units, 59);
        // iPhone 15 (12 < 15), MacBook Air M3 (5 < 8), Logitech Mouse (3 < 5).
        assert_eq!(summary.low_stock, 3);
        assert_eq!(summary.reorder_needed, summary.low_stock);
    }

    #[test]
    fn units_group_by_supplier_in_first_appearance_order() {
        let summary = Catalog::load().summary();
        let pairs: Vec<(&str, u64)> = summary
            .units_by_supplier
            .iter()
            .map(|s| (s.supplier.as_str(), s.units))
            .collect();
        assert_eq!(pairs, vec![("ABC", 17), ("XYZ", 39), ("ACC", 3)]);
    }

    #[test]
    fn stock_levels_follow_catalog_order() {
        let catalog = Catalog::load();
        let summary = catalog.summary();
        let names: Vec<&str> = summary.stock_levels.iter().map(|s| s.product.as_str()).collect();
        let expected: Vec<&str> = catalog.products().iter().map(|p| p.product.as_str()).collect();
        assert_eq!(names, expected);
    }
}
