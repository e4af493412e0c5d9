//! # API Facade
//!
//! [`CatalogApi`] is the single mutable state surface of the viewer: the
//! catalog, one selection per facet, and the record open in the detail view.
//! It is a **thin facade**; the logic lives in [`crate::facets`],
//! [`crate::selection`] and [`crate::catalog`].
//!
//! ## Events and Snapshots
//!
//! Every state change arrives as one discrete call, and every call returns a
//! fresh [`Snapshot`] of derived values:
//!
//! | Event | Method |
//! |-------|--------|
//! | fetch completed / failed | [`CatalogApi::deliver`] |
//! | facet option chosen / cleared | [`CatalogApi::set_breed_group_selection`], [`CatalogApi::set_origin_selection`] |
//! | record opened | [`CatalogApi::open_detail`], [`CatalogApi::open_detail_by`] |
//! | overlay closed | [`CatalogApi::close_detail`] |
//!
//! A renderer is a pure function of the latest snapshot. Facet selections and
//! the detail selection never reset each other: choosing an option keeps the
//! overlay open, and closing the overlay keeps the filters.
//!
//! ## What the API Does NOT Do
//!
//! - **Fetching**: the caller awaits a [`crate::catalog::CatalogSource`] and
//!   hands the resulting event to `deliver`.
//! - **Presentation**: no stdout, no formatting. Snapshot messages carry a
//!   level and plain text; the client decides how to show them.
//!
//! ## Selectors
//!
//! `open_detail_by` accepts what a user would type: a numeric breed id
//! (`"2"`) or a breed name, matched case-insensitively against the full
//! catalog (`"siberian husky"`). Selectors resolve against the full catalog,
//! not the filtered view, so a hidden record can still be opened.

use crate::catalog::{CatalogEvent, CatalogStatus, CatalogStore};
use crate::error::{EverydogError, Result};
use crate::facets::{apply_filters, extract_options, Facet, FacetOption, FacetSelections};
use crate::model::{BreedId, BreedRecord};
use crate::selection::SelectionController;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl ViewMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Immutable view of everything a renderer needs after one event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub status: CatalogStatus,
    pub total: usize,
    pub breed_group_options: Vec<FacetOption>,
    pub origin_options: Vec<FacetOption>,
    pub selections: FacetSelections,
    pub filtered_breeds: Vec<BreedRecord>,
    pub selected_dog: Option<BreedRecord>,
    pub messages: Vec<ViewMessage>,
}

impl Snapshot {
    pub fn options(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::BreedGroup => &self.breed_group_options,
            Facet::Origin => &self.origin_options,
        }
    }
}

/// How a user-typed selector names a breed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreedSelector {
    Id(BreedId),
    Name(String),
}

impl BreedSelector {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EverydogError::Api("Empty breed selector".into()));
        }
        Ok(match trimmed.parse::<BreedId>() {
            Ok(id) => BreedSelector::Id(id),
            Err(_) => BreedSelector::Name(trimmed.to_string()),
        })
    }

    fn matches(&self, record: &BreedRecord) -> bool {
        match self {
            BreedSelector::Id(id) => record.id == *id,
            BreedSelector::Name(name) => record.name.to_lowercase() == name.to_lowercase(),
        }
    }
}

/// The viewer's state object.
#[derive(Debug, Default)]
pub struct CatalogApi {
    store: CatalogStore,
    selections: FacetSelections,
    detail: SelectionController,
}

impl CatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read side ---

    pub fn catalog(&self) -> &[BreedRecord] {
        self.store.records()
    }

    pub fn status(&self) -> CatalogStatus {
        self.store.status()
    }

    pub fn options(&self, facet: Facet) -> Vec<FacetOption> {
        extract_options(self.catalog(), facet)
    }

    pub fn breed_group_options(&self) -> Vec<FacetOption> {
        self.options(Facet::BreedGroup)
    }

    pub fn origin_options(&self) -> Vec<FacetOption> {
        self.options(Facet::Origin)
    }

    pub fn selections(&self) -> &FacetSelections {
        &self.selections
    }

    pub fn filtered_breeds(&self) -> Vec<&BreedRecord> {
        apply_filters(self.catalog(), &self.selections)
    }

    pub fn selected_dog(&self) -> Option<&BreedRecord> {
        self.detail.current()
    }

    /// Find a breed in the full catalog.
    pub fn resolve(&self, selector: &BreedSelector) -> Option<&BreedRecord> {
        self.catalog().iter().find(|r| selector.matches(r))
    }

    pub fn snapshot(&self) -> Snapshot {
        let status = self.status();
        let filtered_breeds: Vec<BreedRecord> =
            self.filtered_breeds().into_iter().cloned().collect();
        let breed_group_options = self.breed_group_options();
        let origin_options = self.origin_options();

        let mut messages = Vec::new();
        match &status {
            CatalogStatus::Unavailable { reason } => {
                messages.push(ViewMessage::error(format!("Catalog unavailable: {}", reason)));
            }
            CatalogStatus::Loaded { count, .. } => {
                for (facet, options) in [
                    (Facet::BreedGroup, &breed_group_options),
                    (Facet::Origin, &origin_options),
                ] {
                    if let Some(selected) = self.selections.get(facet) {
                        if !options.contains(selected) {
                            messages.push(ViewMessage::warning(format!(
                                "{} \"{}\" is not one of the catalog's options.",
                                facet.label(),
                                selected.value
                            )));
                        }
                    }
                }
                if *count > 0 && filtered_breeds.is_empty() {
                    messages.push(ViewMessage::info("No breeds match the current filters."));
                }
            }
            CatalogStatus::Pending => {}
        }

        Snapshot {
            status,
            total: self.catalog().len(),
            breed_group_options,
            origin_options,
            selections: self.selections.clone(),
            filtered_breeds,
            selected_dog: self.selected_dog().cloned(),
            messages,
        }
    }

    // --- Mutators ---

    /// Hand the one-shot fetch outcome to the catalog store.
    pub fn deliver(&mut self, event: CatalogEvent) -> Snapshot {
        self.store.deliver(event);
        self.snapshot()
    }

    pub fn set_selection(&mut self, facet: Facet, option: Option<FacetOption>) -> Snapshot {
        debug!(
            facet = facet.name(),
            value = option.as_ref().map(|o| o.value.as_str()).unwrap_or("<none>"),
            "facet selection changed"
        );
        self.selections.set(facet, option);
        self.snapshot()
    }

    pub fn set_breed_group_selection(&mut self, option: Option<FacetOption>) -> Snapshot {
        self.set_selection(Facet::BreedGroup, option)
    }

    pub fn set_origin_selection(&mut self, option: Option<FacetOption>) -> Snapshot {
        self.set_selection(Facet::Origin, option)
    }

    /// Open `record` in the detail view, replacing any open record.
    pub fn open_detail(&mut self, record: BreedRecord) -> Snapshot {
        debug!(id = record.id, name = %record.name, "detail opened");
        self.detail.open(record);
        self.snapshot()
    }

    /// Resolve a user-typed selector and open the matching breed.
    ///
    /// Unknown selectors are an error and leave the state unchanged.
    pub fn open_detail_by(&mut self, input: &str) -> Result<Snapshot> {
        let selector = BreedSelector::parse(input)?;
        let record = self
            .resolve(&selector)
            .cloned()
            .ok_or_else(|| EverydogError::BreedNotFound(input.trim().to_string()))?;
        Ok(self.open_detail(record))
    }

    pub fn close_detail(&mut self) -> Snapshot {
        self.detail.close();
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::sample_catalog;

    fn loaded() -> CatalogApi {
        let mut api = CatalogApi::new();
        api.deliver(CatalogEvent::Loaded(sample_catalog()));
        api
    }

    fn filtered_names(snapshot: &Snapshot) -> Vec<&str> {
        snapshot
            .filtered_breeds
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    #[test]
    fn pending_api_exposes_empty_derivations() {
        let snapshot = CatalogApi::new().snapshot();
        assert_eq!(snapshot.status, CatalogStatus::Pending);
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.breed_group_options.is_empty());
        assert!(snapshot.filtered_breeds.is_empty());
        assert!(snapshot.messages.is_empty());
    }

    #[test]
    fn deliver_populates_options_and_view() {
        let snapshot = CatalogApi::new().deliver(CatalogEvent::Loaded(sample_catalog()));
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.breed_group_options, vec![FacetOption::new("Working")]);
        assert_eq!(snapshot.options(Facet::Origin).len(), 3);
        assert_eq!(filtered_names(&snapshot), vec!["Akita", "Husky", "Pug"]);
    }

    #[test]
    fn failed_fetch_reports_unavailable() {
        let snapshot = CatalogApi::new().deliver(CatalogEvent::Failed("timeout".into()));
        assert!(snapshot.filtered_breeds.is_empty());
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.messages[0].level, MessageLevel::Error);
        assert!(snapshot.messages[0].content.contains("timeout"));
    }

    #[test]
    fn selections_narrow_view_but_not_options() {
        let mut api = loaded();
        let snapshot = api.set_breed_group_selection(Some(FacetOption::new("Working")));
        assert_eq!(filtered_names(&snapshot), vec!["Akita", "Husky"]);

        let snapshot = api.set_origin_selection(Some(FacetOption::new("Russia")));
        assert_eq!(filtered_names(&snapshot), vec!["Husky"]);
        assert_eq!(snapshot.origin_options.len(), 3);
        assert_eq!(snapshot.breed_group_options.len(), 1);

        let snapshot = api.set_breed_group_selection(None);
        assert_eq!(filtered_names(&snapshot), vec!["Husky"]);
        assert_eq!(snapshot.selections.origin, Some(FacetOption::new("Russia")));
    }

    #[test]
    fn stale_selection_yields_warning_and_info() {
        let mut api = loaded();
        let snapshot = api.set_breed_group_selection(Some(FacetOption::new("Toy")));
        assert!(snapshot.filtered_breeds.is_empty());
        assert_eq!(
            snapshot.messages,
            vec![
                ViewMessage::warning("Group \"Toy\" is not one of the catalog's options."),
                ViewMessage::info("No breeds match the current filters."),
            ]
        );
    }

    #[test]
    fn valid_but_disjoint_selections_only_inform() {
        let mut api = loaded();
        api.set_breed_group_selection(Some(FacetOption::new("Working")));
        let snapshot = api.set_origin_selection(Some(FacetOption::new("China")));
        assert_eq!(
            snapshot.messages,
            vec![ViewMessage::info("No breeds match the current filters.")]
        );
    }

    #[test]
    fn detail_survives_filter_changes() {
        let mut api = loaded();
        let pug = sample_catalog()[2].clone();
        api.open_detail(pug.clone());

        let snapshot = api.set_breed_group_selection(Some(FacetOption::new("Working")));
        assert_eq!(snapshot.selected_dog, Some(pug));
        assert_eq!(filtered_names(&snapshot), vec!["Akita", "Husky"]);

        let snapshot = api.close_detail();
        assert_eq!(snapshot.selected_dog, None);
        assert_eq!(snapshot.selections.breed_group, Some(FacetOption::new("Working")));
    }

    #[test]
    fn open_open_close_leaves_nothing_selected() {
        let mut api = loaded();
        let catalog = sample_catalog();
        api.open_detail(catalog[0].clone());
        let snapshot = api.open_detail(catalog[2].clone());
        assert_eq!(snapshot.selected_dog.as_ref().map(|r| r.id), Some(3));
        assert_eq!(api.close_detail().selected_dog, None);
    }

    #[test]
    fn open_detail_by_id_or_name() {
        let mut api = loaded();
        let snapshot = api.open_detail_by("2").unwrap();
        assert_eq!(snapshot.selected_dog.map(|r| r.name), Some("Husky".to_string()));

        let snapshot = api.open_detail_by("  pug ").unwrap();
        assert_eq!(snapshot.selected_dog.map(|r| r.id), Some(3));
    }

    #[test]
    fn open_detail_by_reaches_filtered_out_records() {
        let mut api = loaded();
        api.set_breed_group_selection(Some(FacetOption::new("Working")));
        let snapshot = api.open_detail_by("Pug").unwrap();
        assert_eq!(snapshot.selected_dog.map(|r| r.name), Some("Pug".to_string()));
    }

    #[test]
    fn unknown_selector_keeps_state() {
        let mut api = loaded();
        api.open_detail_by("Akita").unwrap();

        match api.open_detail_by("Beagle") {
            Err(EverydogError::BreedNotFound(s)) => assert_eq!(s, "Beagle"),
            other => panic!("Expected BreedNotFound, got {:?}", other),
        }
        assert_eq!(api.selected_dog().map(|r| r.name.as_str()), Some("Akita"));
        assert!(api.open_detail_by("   ").is_err());
    }

    #[test]
    fn name_selector_folds_non_ascii_case() {
        let mut api = CatalogApi::new();
        api.deliver(CatalogEvent::Loaded(vec![BreedRecord::new(7, "Löwchen")]));
        let snapshot = api.open_detail_by("LÖWCHEN").unwrap();
        assert_eq!(snapshot.selected_dog.map(|r| r.id), Some(7));
    }

    #[test]
    fn selector_parsing() {
        assert_eq!(BreedSelector::parse("42").unwrap(), BreedSelector::Id(42));
        assert_eq!(
            BreedSelector::parse("Shiba Inu").unwrap(),
            BreedSelector::Name("Shiba Inu".into())
        );
        assert_eq!(
            BreedSelector::parse("-1").unwrap(),
            BreedSelector::Name("-1".into())
        );
    }

    #[test]
    fn snapshot_serializes_for_clients() {
        let mut api = loaded();
        api.set_origin_selection(Some(FacetOption::new("Japan")));
        let value = serde_json::to_value(api.snapshot()).unwrap();

        assert_eq!(value["status"]["state"], "loaded");
        assert_eq!(value["status"]["count"], 3);
        assert_eq!(value["selections"]["origin"]["value"], "Japan");
        assert_eq!(value["filteredBreeds"][0]["name"], "Akita");
        assert!(value["selectedDog"].is_null());
        assert_eq!(value["breedGroupOptions"][0]["label"], "Working");
    }
}
