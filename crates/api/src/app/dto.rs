use serde::Deserialize;

use stockdeck_query::{Criteria, Facet};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub page: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Filter selections as they arrive on the query string. Absent
/// parameters mean match-all / unbounded.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryQuery {
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl InventoryQuery {
    pub fn into_criteria(self) -> Criteria {
        Criteria {
            category: Facet::parse(self.category.as_deref()),
            supplier: Facet::parse(self.supplier.as_deref()),
            price_min: self.price_min.unwrap_or(0.0),
            price_max: self.price_max.unwrap_or(f64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_parameters_mean_match_everything() {
        let criteria = InventoryQuery::default().into_criteria();
        assert_eq!(criteria, Criteria::default());
    }

    #[test]
    fn selections_map_onto_facets_and_bounds() {
        let query = InventoryQuery {
            category: Some("Mobile".into()),
            supplier: Some("All".into()),
            price_min: None,
            price_max: Some(2000.0),
        };

        let criteria = query.into_criteria();
        assert_eq!(criteria.category, Facet::Only("Mobile".into()));
        assert_eq!(criteria.supplier, Facet::All);
        assert_eq!(criteria.price_min, 0.0);
        assert_eq!(criteria.price_max, 2000.0);
    }
}
