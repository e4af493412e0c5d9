//! # Data Model
//!
//! A [`BreedRecord`] is one entry of The Dog API breed list. Only `id`, `name`,
//! `breed_group` and `origin` carry meaning for the library; the remaining
//! fields are display attributes passed through untouched.
//!
//! ## Wire Format
//!
//! Records (de)serialize with the API's own field names, so a payload fetched
//! over HTTP can be written to disk and read back through the file source:
//!
//! ```text
//! {
//!   "id": 1,
//!   "name": "Affenpinscher",
//!   "breed_group": "Toy",
//!   "origin": "Germany, France",
//!   "reference_image_id": "BJa4kxc4X",
//!   "life_span": "10 - 12 years",
//!   "temperament": "Stubborn, Curious, Playful"
//! }
//! ```
//!
//! Fields the API sends but the viewer has no use for (`weight`, `height`,
//! `bred_for`, `image`, ...) are ignored on input.
//!
//! ## Unknown Values
//!
//! An absent or empty `breed_group`/`origin` is a valid "unknown" state. Such
//! records stay in the catalog, never contribute a facet option, and render
//! as [`UNKNOWN`] in the detail view.

use serde::{Deserialize, Serialize};

/// Placeholder shown in the detail view for a missing group or origin.
pub const UNKNOWN: &str = "Unknown";

pub type BreedId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRecord {
    pub id: BreedId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(
        default,
        rename = "reference_image_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_span: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
}

impl BreedRecord {
    pub fn new(id: BreedId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            breed_group: None,
            origin: None,
            image_id: None,
            life_span: None,
            temperament: None,
        }
    }

    pub fn with_breed_group(mut self, group: impl Into<String>) -> Self {
        self.breed_group = Some(group.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    pub fn with_life_span(mut self, life_span: impl Into<String>) -> Self {
        self.life_span = Some(life_span.into());
        self
    }

    pub fn with_temperament(mut self, temperament: impl Into<String>) -> Self {
        self.temperament = Some(temperament.into());
        self
    }

    /// Breed group for display, falling back to [`UNKNOWN`].
    pub fn display_group(&self) -> &str {
        non_empty(self.breed_group.as_deref()).unwrap_or(UNKNOWN)
    }

    /// Origin for display, falling back to [`UNKNOWN`].
    pub fn display_origin(&self) -> &str {
        non_empty(self.origin.as_deref()).unwrap_or(UNKNOWN)
    }

    /// Full image URL under `base`, or `None` when the record has no image.
    pub fn image_url(&self, base: &str) -> Option<String> {
        non_empty(self.image_id.as_deref())
            .map(|id| format!("{}/{}.jpg", base.trim_end_matches('/'), id))
    }
}

/// Treats `Some("")` like `None`.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
