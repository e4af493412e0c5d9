//! # CLI Behavior
//!
//! This is **one possible UI client** for everydog, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Startup
//!
//! Every invocation performs the one-shot catalog fetch before anything else:
//! `--source FILE` reads a saved payload, otherwise the configured Dog API
//! endpoint is queried. One-shot commands fail with `Error: Catalog
//! unavailable: ...` when that fetch fails; `browse` still starts and shows
//! the error.
//!
//! ### Naked Execution (`everydog`)
//!
//! Running `everydog` with no command lists every breed.
//!
//! ### Interactive Session (`everydog browse`)
//!
//! Reads one event per line from stdin (`group Toy`, `open 3`, `close`, ...)
//! and renders the new snapshot after each one. Piping a script into it works
//! the same as typing.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, fetch, per-command handlers
//! - `browse`: Line-oriented interactive session
//! - `render`: Snapshot formatting (lists, options, detail overlay)
//! - `setup`: Argument parsing via clap

mod browse;
mod commands;
mod render;
pub mod setup;

pub use commands::run;
