//! Predicate composition and application.

use stockdeck_catalog::{Catalog, Product};

use crate::criteria::{Criteria, ALL};

/// One filter predicate over a record.
type Predicate<'a> = Box<dyn Fn(&Product) -> bool + 'a>;

/// The three predicates of a criteria, as an explicit list. A record is
/// kept only when every predicate holds (pure conjunction, no OR
/// semantics anywhere).
fn predicates(criteria: &Criteria) -> Vec<Predicate<'_>> {
    vec![
        Box::new(move |p: &Product| criteria.category.matches(&p.category)),
        Box::new(move |p: &Product| criteria.supplier.matches(&p.supplier)),
        Box::new(move |p: &Product| {
            p.price >= criteria.price_min && p.price <= criteria.price_max
        }),
    ]
}

/// Apply the criteria to the catalog.
///
/// Pure function; the result is an order-preserving subsequence of the
/// catalog. An empty result is valid and renders as an empty table.
pub fn apply(catalog: &Catalog, criteria: &Criteria) -> Vec<Product> {
    let preds = predicates(criteria);
    catalog
        .products()
        .iter()
        .filter(|p| preds.iter().all(|pred| pred(p)))
        .cloned()
        .collect()
}

/// Category options offered to the caller: sorted distinct values,
/// prefixed with the match-all sentinel.
pub fn category_options(catalog: &Catalog) -> Vec<String> {
    facet_options(catalog.products().iter().map(|p| p.category.as_str()))
}

/// Supplier options offered to the caller: sorted distinct values,
/// prefixed with the match-all sentinel.
pub fn supplier_options(catalog: &Catalog) -> Vec<String> {
    facet_options(catalog.products().iter().map(|p| p.supplier.as_str()))
}

fn facet_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = values.map(str::to_string).collect();
    distinct.sort();
    distinct.dedup();

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(ALL.to_string());
    options.extend(distinct);
    options
}
