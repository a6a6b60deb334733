//! Filter criteria: the transient value object built per render cycle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockdeck_core::ValueObject;

/// Sentinel offered at the head of every facet option list.
pub const ALL: &str = "All";

/// A single facet selection: either the match-all sentinel or one concrete
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    All,
    Only(String),
}

impl Facet {
    /// Build a facet from a raw user selection. The sentinel (or nothing)
    /// means match-all.
    pub fn parse(selection: Option<&str>) -> Self {
        match selection {
            None => Facet::All,
            Some(s) if s == ALL => Facet::All,
            Some(s) => Facet::Only(s.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(v) => v == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(v) => v,
        }
    }
}

// On the wire a facet is just its selection string, with the sentinel
// spelled out ("All"). The sentinel is reserved: it never names a real
// category or supplier.
impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Facet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Facet::parse(Some(&s)))
    }
}

/// Filter criteria for one query: category, supplier, inclusive price
/// range. Built from user input per request; never persisted.
///
/// There is deliberately no validation: `price_min > price_max` is an
/// empty range, and an empty range yields an empty result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub category: Facet,
    pub supplier: Facet,
    pub price_min: f64,
    pub price_max: f64,
}

impl Default for Criteria {
    /// The match-everything criteria: both facets open, price unbounded.
    fn default() -> Self {
        Self {
            category: Facet::All,
            supplier: Facet::All,
            price_min: 0.0,
            price_max: f64::MAX,
        }
    }
}

impl ValueObject for Criteria {}
