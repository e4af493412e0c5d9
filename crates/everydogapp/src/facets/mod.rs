//! # Facet System
//!
//! A facet is one filterable attribute of a breed. The viewer has exactly two:
//! breed group and origin. This module holds everything that reasons about them:
//!
//! - **Specifications**: the closed [`Facet`] enum and its registry ([`FACETS`])
//! - **Options**: [`extract_options`] derives the pickable values for a facet
//! - **Filtering**: [`FacetSelections`] + [`apply_filters`] narrow the catalog
//!
//! ## Options vs. Filtering
//!
//! | Step | Input | Output |
//! |------|-------|--------|
//! | `extract_options` | full catalog, facet | distinct non-empty values, first-seen order |
//! | `apply_filters` | full catalog, selections | order-preserving sub-sequence |
//!
//! Options are always derived from the **full** catalog, never from the
//! filtered view, so a user can always widen a selection back out.
//!
//! ## Usage
//!
//! ```ignore
//! let groups = extract_options(catalog, Facet::BreedGroup);
//!
//! let mut selections = FacetSelections::default();
//! selections.set(Facet::BreedGroup, Some(groups[0].clone()));
//! let visible = apply_filters(catalog, &selections);
//! ```

mod filter;
mod options;
mod spec;

pub use filter::{apply_filters, FacetFilter, FacetSelections};
pub use options::{extract_options, FacetOption};
pub use spec::{get_spec, Facet, FacetSpec, FACETS};
