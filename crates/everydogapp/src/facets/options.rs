//! Facet option extraction.

use super::Facet;
use crate::model::{non_empty, BreedRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A pickable value for a facet. `value` and `label` are always equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Derive the distinct, non-empty values of `facet` across `catalog`.
///
/// Values appear in first-seen order and are compared by exact string
/// equality. Records with an absent or empty value contribute nothing.
pub fn extract_options(catalog: &[BreedRecord], facet: Facet) -> Vec<FacetOption> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter_map(|record| non_empty(facet.value_of(record)))
        .filter(|value| seen.insert(*value))
        .map(FacetOption::new)
        .collect()
}
