//! Facet filtering.
//!
//! Each active selection becomes a [`FacetFilter`] predicate. A record stays in
//! the filtered view only when it satisfies every predicate (AND logic), and
//! the view keeps the catalog's order.

use super::{Facet, FacetOption};
use crate::model::BreedRecord;
use serde::{Deserialize, Serialize};

/// An exact-match condition on one facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub facet: Facet,
    pub value: String,
}

impl FacetFilter {
    pub fn new(facet: Facet, value: impl Into<String>) -> Self {
        Self {
            facet,
            value: value.into(),
        }
    }

    /// True when the record's facet value equals the filter value exactly.
    /// A record without a value never matches.
    pub fn matches(&self, record: &BreedRecord) -> bool {
        self.facet.value_of(record) == Some(self.value.as_str())
    }
}

/// The user's current choice for each facet. `None` means "no selection".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelections {
    pub breed_group: Option<FacetOption>,
    pub origin: Option<FacetOption>,
}

impl FacetSelections {
    pub fn get(&self, facet: Facet) -> Option<&FacetOption> {
        match facet {
            Facet::BreedGroup => self.breed_group.as_ref(),
            Facet::Origin => self.origin.as_ref(),
        }
    }

    /// Replace the selection for one facet, leaving the other untouched.
    pub fn set(&mut self, facet: Facet, option: Option<FacetOption>) {
        match facet {
            Facet::BreedGroup => self.breed_group = option,
            Facet::Origin => self.origin = option,
        }
    }

    pub fn clear(&mut self, facet: Facet) {
        self.set(facet, None);
    }

    pub fn is_empty(&self) -> bool {
        self.breed_group.is_none() && self.origin.is_none()
    }

    /// One filter per active selection, in facet order.
    pub fn filters(&self) -> Vec<FacetFilter> {
        Facet::ALL
            .iter()
            .filter_map(|&facet| {
                self.get(facet)
                    .map(|option| FacetFilter::new(facet, option.value.clone()))
            })
            .collect()
    }
}

/// Narrow `catalog` to the records matching every active selection.
///
/// With no active selection the result holds the whole catalog in order.
/// The input is never modified.
pub fn apply_filters<'a>(
    catalog: &'a [BreedRecord],
    selections: &FacetSelections,
) -> Vec<&'a BreedRecord> {
    let filters = selections.filters();
    catalog
        .iter()
        .filter(|record| filters.iter().all(|f| f.matches(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::{names, sample_catalog};
    use crate::facets::extract_options;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn select(group: Option<&str>, origin: Option<&str>) -> FacetSelections {
        FacetSelections {
            breed_group: group.map(FacetOption::new),
            origin: origin.map(FacetOption::new),
        }
    }

    #[test]
    fn filter_matches_exact_value_only() {
        let filter = FacetFilter::new(Facet::BreedGroup, "Working");

        assert!(filter.matches(&BreedRecord::new(1, "A").with_breed_group("Working")));
        assert!(!filter.matches(&BreedRecord::new(2, "B").with_breed_group("working")));
        assert!(!filter.matches(&BreedRecord::new(3, "C").with_breed_group("Working Dogs")));
        assert!(!filter.matches(&BreedRecord::new(4, "D")));
    }

    #[test]
    fn no_selection_returns_whole_catalog() {
        let catalog = sample_catalog();
        let result = apply_filters(&catalog, &FacetSelections::default());
        assert_eq!(names(&result), vec!["Akita", "Husky", "Pug"]);
    }

    #[test]
    fn single_facet_selection() {
        let catalog = sample_catalog();
        let result = apply_filters(&catalog, &select(Some("Working"), None));
        assert_eq!(names(&result), vec!["Akita", "Husky"]);
    }

    #[test]
    fn both_facets_combine_with_and() {
        let catalog = sample_catalog();
        let result = apply_filters(&catalog, &select(Some("Working"), Some("Russia")));
        assert_eq!(names(&result), vec!["Husky"]);
    }

    #[test]
    fn unmatched_value_yields_empty_view() {
        let catalog = sample_catalog();
        assert!(apply_filters(&catalog, &select(Some("Toy"), None)).is_empty());
    }

    #[test]
    fn records_without_value_drop_out_under_selection() {
        let catalog = sample_catalog();
        let result = apply_filters(&catalog, &select(None, Some("China")));
        assert_eq!(names(&result), vec!["Pug"]);
        assert!(apply_filters(&catalog, &select(Some("Working"), Some("China"))).is_empty());
    }

    #[test]
    fn catalog_is_untouched() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let _ = apply_filters(&catalog, &select(Some("Working"), Some("Japan")));
        assert_eq!(catalog, before);
    }

    #[test]
    fn set_leaves_other_facet_alone() {
        let mut selections = select(Some("Working"), Some("Japan"));
        selections.set(Facet::Origin, Some(FacetOption::new("Russia")));
        assert_eq!(selections.breed_group, Some(FacetOption::new("Working")));

        selections.clear(Facet::BreedGroup);
        assert_eq!(selections.breed_group, None);
        assert_eq!(selections.origin, Some(FacetOption::new("Russia")));
        assert!(!selections.is_empty());

        selections.clear(Facet::Origin);
        assert!(selections.is_empty());
        assert!(selections.filters().is_empty());
    }

    #[test]
    fn selections_serialize_with_facet_names() {
        let value = serde_json::to_value(select(Some("Toy"), None)).unwrap();
        assert_eq!(value["breedGroup"]["value"], "Toy");
        assert!(value["origin"].is_null());
    }

    const POOL: [&str; 4] = ["", "Toy", "Working", "Hound"];

    fn arb_catalog() -> impl Strategy<Value = Vec<BreedRecord>> {
        let value = || prop::option::of(prop::sample::select(POOL.to_vec()));
        prop::collection::vec((value(), value()), 0..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (group, origin))| {
                    let mut record = BreedRecord::new(i as u32, format!("Breed {}", i));
                    record.breed_group = group.map(str::to_string);
                    record.origin = origin.map(str::to_string);
                    record
                })
                .collect()
        })
    }

    fn arb_choice() -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(POOL.to_vec()))
    }

    fn ids(records: &[&BreedRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subsequence(
            catalog in arb_catalog(),
            group in arb_choice(),
            origin in arb_choice(),
        ) {
            let result = ids(&apply_filters(&catalog, &select(group, origin)));
            let mut cursor = catalog.iter().map(|r| r.id);
            for id in &result {
                prop_assert!(cursor.any(|c| c == *id));
            }
        }

        #[test]
        fn prop_combined_equals_intersection(
            catalog in arb_catalog(),
            group in arb_choice(),
            origin in arb_choice(),
        ) {
            let both = ids(&apply_filters(&catalog, &select(group, origin)));
            let by_group: HashSet<u32> =
                ids(&apply_filters(&catalog, &select(group, None))).into_iter().collect();
            let by_origin: HashSet<u32> =
                ids(&apply_filters(&catalog, &select(None, origin))).into_iter().collect();

            let expected: Vec<u32> = catalog
                .iter()
                .map(|r| r.id)
                .filter(|id| by_group.contains(id) && by_origin.contains(id))
                .collect();
            prop_assert_eq!(both, expected);
        }

        #[test]
        fn prop_no_selection_is_identity(catalog in arb_catalog()) {
            let result = apply_filters(&catalog, &FacetSelections::default());
            let all: Vec<&BreedRecord> = catalog.iter().collect();
            prop_assert_eq!(result, all);
        }

        #[test]
        fn prop_options_ignore_selections(
            catalog in arb_catalog(),
            group in arb_choice(),
        ) {
            let before = extract_options(&catalog, Facet::Origin);
            let _ = apply_filters(&catalog, &select(group, None));
            prop_assert_eq!(extract_options(&catalog, Facet::Origin), before);
        }
    }
}
