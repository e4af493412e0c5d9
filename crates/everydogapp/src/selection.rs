//! # Detail Selection
//!
//! Tracks the single breed opened in the detail overlay.
//!
//! ```text
//!            open(y)                 open(y)
//!   Closed ───────────▶ Open(x) ───────────▶ Open(y)
//!     ▲                    │
//!     └──────── close() ───┘      close() on Closed stays Closed
//! ```
//!
//! The controller never consults the catalog or the active filters: a record
//! hidden by the current selections can still be opened, and changing filters
//! never closes the overlay.

use crate::model::BreedRecord;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "record", rename_all = "lowercase")]
pub enum DetailState {
    #[default]
    Closed,
    Open(BreedRecord),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: DetailState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `record`, replacing whatever was open before.
    pub fn open(&mut self, record: BreedRecord) {
        self.state = DetailState::Open(record);
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }

    pub fn current(&self) -> Option<&BreedRecord> {
        match &self.state {
            DetailState::Open(record) => Some(record),
            DetailState::Closed => None,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}
