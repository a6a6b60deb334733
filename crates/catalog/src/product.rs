//! Product record: one row of the catalog table.

use serde::{Deserialize, Serialize};

use stockdeck_core::Entity;

/// Stock-keeping unit — the unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(pub String);

impl Sku {
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog record.
///
/// Loaded once at startup and never mutated: there are no create/update/
/// delete operations anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub product: String,
    pub category: String,
    pub qty: u32,
    pub min_stock: u32,
    pub price: f64,
    pub supplier: String,
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        product: impl Into<String>,
        category: impl Into<String>,
        qty: u32,
        min_stock: u32,
        price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            sku: Sku::new(sku),
            product: product.into(),
            category: category.into(),
            qty,
            min_stock,
            price,
            supplier: supplier.into(),
        }
    }

    /// A record is low on stock when its quantity has fallen below the
    /// reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.qty < self.min_stock
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}
