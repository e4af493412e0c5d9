//! # Catalog Layer
//!
//! The catalog is the ordered list of breeds the viewer works on. It is filled
//! exactly once, from an asynchronous fetch, and never edited afterwards.
//!
//! ## Lifecycle
//!
//! ```text
//!                 CatalogEvent::Loaded(records)
//!   Pending ─────────────────────────────────────▶ Loaded
//!      │
//!      └──── CatalogEvent::Failed(reason) ───────▶ Unavailable
//! ```
//!
//! - **Pending**: nothing fetched yet. `records()` is empty; this is not an error.
//! - **Loaded**: the payload was admitted whole, in source order.
//! - **Unavailable**: the fetch failed, or the delivered records repeat a
//!   breed id. `records()` stays empty; no partial payload is ever admitted.
//!
//! Only the first event is applied. A second delivery is logged and ignored;
//! recovering from `Unavailable` takes a fresh [`CatalogStore`].
//!
//! ## Sources
//!
//! Where the records come from is abstracted behind [`CatalogSource`]:
//!
//! - [`http::HttpSource`]: The Dog API over HTTPS (production).
//! - [`file::FileSource`]: a saved JSON payload on disk.
//! - [`memory::MemorySource`]: fixed records or a fixed failure, for tests.
//!
//! [`fetch_event`] awaits a source once and turns the outcome into the event
//! the store consumes.

use crate::error::{EverydogError, Result};
use crate::model::{BreedId, BreedRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub mod file;
pub mod http;
pub mod memory;
pub mod source;

pub use source::CatalogSource;

/// The one-shot completion of a catalog fetch.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    Loaded(Vec<BreedRecord>),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Pending,
    Loaded {
        records: Vec<BreedRecord>,
        fetched_at: DateTime<Utc>,
    },
    Unavailable {
        reason: String,
    },
}

/// Serializable summary of [`CatalogState`], without the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CatalogStatus {
    Pending,
    Loaded {
        count: usize,
        fetched_at: DateTime<Utc>,
    },
    Unavailable {
        reason: String,
    },
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the fetch outcome. Returns `false` when an earlier event was
    /// already applied and this one was ignored.
    pub fn deliver(&mut self, event: CatalogEvent) -> bool {
        if !matches!(self.state, CatalogState::Pending) {
            warn!("catalog already settled, ignoring a second fetch event");
            return false;
        }

        self.state = match event {
            CatalogEvent::Loaded(records) => match check_unique_ids(&records) {
                Ok(()) => {
                    info!(count = records.len(), "catalog loaded");
                    CatalogState::Loaded {
                        records,
                        fetched_at: Utc::now(),
                    }
                }
                Err(e) => {
                    let reason = e.to_string();
                    warn!(%reason, "catalog rejected");
                    CatalogState::Unavailable { reason }
                }
            },
            CatalogEvent::Failed(reason) => {
                warn!(%reason, "catalog unavailable");
                CatalogState::Unavailable { reason }
            }
        };
        true
    }

    /// Loaded records in source order; empty unless the fetch succeeded.
    pub fn records(&self) -> &[BreedRecord] {
        match &self.state {
            CatalogState::Loaded { records, .. } => records,
            _ => &[],
        }
    }

    pub fn find(&self, id: BreedId) -> Option<&BreedRecord> {
        self.records().iter().find(|r| r.id == id)
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn status(&self) -> CatalogStatus {
        match &self.state {
            CatalogState::Pending => CatalogStatus::Pending,
            CatalogState::Loaded {
                records,
                fetched_at,
            } => CatalogStatus::Loaded {
                count: records.len(),
                fetched_at: *fetched_at,
            },
            CatalogState::Unavailable { reason } => CatalogStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}

/// Parse a Dog API breed list.
///
/// The payload is admitted whole or not at all: a record missing `id` or
/// `name`, or two records sharing an id, rejects the entire payload.
pub fn parse_payload(text: &str) -> Result<Vec<BreedRecord>> {
    let records: Vec<BreedRecord> = serde_json::from_str(text)?;
    check_unique_ids(&records)?;
    Ok(records)
}

/// Every breed id must appear once.
pub fn check_unique_ids(records: &[BreedRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    match records.iter().find(|r| !seen.insert(r.id)) {
        Some(dup) => Err(EverydogError::Malformed(format!(
            "duplicate breed id {} ({})",
            dup.id, dup.name
        ))),
        None => Ok(()),
    }
}

/// Await `source` once and convert the outcome into a [`CatalogEvent`].
pub async fn fetch_event(source: &dyn CatalogSource) -> CatalogEvent {
    debug!(source = %source.describe(), "fetching catalog");
    match source.fetch().await {
        Ok(records) => CatalogEvent::Loaded(records),
        Err(e) => CatalogEvent::Failed(e.to_string()),
    }
}
