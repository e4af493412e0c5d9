//! # Everydog Architecture
//!
//! Everydog is a **UI-agnostic catalog viewer library** for The Dog API breed
//! list. It fetches the list once, derives facet options from it, filters it by
//! breed group and origin, and tracks the one breed opened for detail. Any
//! presentation client (the `everydog` terminal client, a web front end) is an
//! external collaborator that renders snapshots and raises events.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (everydog binary, or any other UI)                  │
//! │  - Awaits a CatalogSource, renders Snapshots                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ events          ▲ snapshots
//!                              ▼                 │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns catalog + facet selections + detail selection       │
//! │  - Every mutator returns a fresh Snapshot                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic (facets/, selection.rs)                              │
//! │  - Pure option extraction and filtering                     │
//! │  - Two-state detail selection                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                                   │
//! │  - One-shot CatalogStore                                    │
//! │  - CatalogSource: HttpSource, FileSource, MemorySource      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! There is one state surface and one thread of control. The only async step
//! is the initial fetch; its outcome arrives as a single [`catalog::CatalogEvent`]
//! and everything after that is synchronous.
//!
//! ## Module Overview
//!
//! - [`api`]: The state object and its snapshots
//! - [`facets`]: Facet specs, option extraction, filtering
//! - [`selection`]: Detail view selection
//! - [`catalog`]: Catalog store and sources
//! - [`model`]: `BreedRecord` and display helpers
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod facets;
pub mod model;
pub mod selection;
