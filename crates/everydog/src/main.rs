//! # Everydog CLI
//!
//! The terminal client is **one possible presentation collaborator** for the
//! `everydogapp` library. This file only invokes `cli::run()` and handles
//! process termination; everything else lives in `src/cli/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/everydog/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, fetch, dispatch (commands.rs)            │
//! │  - Interactive event loop (browse.rs)                       │
//! │  - Terminal rendering of snapshots (render.rs)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/everydogapp/src/api.rs)                  │
//! │  - Owns catalog, facet selections, detail selection         │
//! │  - Returns a Snapshot after every event                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI never filters or deduplicates anything itself: it turns arguments
//! and input lines into API events and renders whatever snapshot comes back.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
