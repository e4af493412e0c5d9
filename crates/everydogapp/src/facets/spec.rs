//! Facet specifications and registry.
//!
//! Each facet has a wire name (as exposed to presentation clients), a human
//! label for pickers and the detail view, and the aliases accepted from
//! user input.

use crate::error::{EverydogError, Result};
use crate::model::BreedRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two filterable attributes of a breed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    BreedGroup,
    Origin,
}

/// Specification for a single facet.
#[derive(Debug, Clone)]
pub struct FacetSpec {
    pub facet: Facet,
    /// Stable name used in snapshots and JSON output.
    pub name: &'static str,
    /// Label shown next to pickers and in the detail view.
    pub label: &'static str,
    /// Lowercase spellings accepted by [`Facet::from_str`].
    pub aliases: &'static [&'static str],
}

/// Registry of all facets, in picker order.
pub const FACETS: &[FacetSpec] = &[
    FacetSpec {
        facet: Facet::BreedGroup,
        name: "breedGroup",
        label: "Group",
        aliases: &["breedgroup", "breed-group", "breed_group", "group"],
    },
    FacetSpec {
        facet: Facet::Origin,
        name: "origin",
        label: "Origin",
        aliases: &["origin", "country"],
    },
];

/// Look up the spec for a facet.
pub fn get_spec(facet: Facet) -> &'static FacetSpec {
    match facet {
        Facet::BreedGroup => &FACETS[0],
        Facet::Origin => &FACETS[1],
    }
}

impl Facet {
    pub const ALL: [Facet; 2] = [Facet::BreedGroup, Facet::Origin];

    pub fn name(self) -> &'static str {
        get_spec(self).name
    }

    pub fn label(self) -> &'static str {
        get_spec(self).label
    }

    /// Project the facet's raw value out of a record.
    ///
    /// Returns the value as stored, including `Some("")`; callers that need
    /// the "unknown" rule apply it themselves.
    pub fn value_of(self, record: &BreedRecord) -> Option<&str> {
        match self {
            Facet::BreedGroup => record.breed_group.as_deref(),
            Facet::Origin => record.origin.as_deref(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = EverydogError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        FACETS
            .iter()
            .find(|spec| spec.aliases.contains(&needle.as_str()))
            .map(|spec| spec.facet)
            .ok_or_else(|| EverydogError::Api(format!("Unknown facet: {}", s)))
    }
}
