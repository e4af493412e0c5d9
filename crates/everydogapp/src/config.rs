//! # Configuration
//!
//! Settings for the fetch collaborator, loaded with [`confique`] from layered
//! sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `EVERYDOG_ENDPOINT`, `EVERYDOG_API_KEY`, etc.
//! 2. **Explicit file**: passed by the client (`everydog --config path.toml`).
//! 3. **Global Config**: `everydog.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped silently; a file that exists but does not parse
//! is an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `endpoint` | `https://api.thedogapi.com/v1/breeds` | Breed list URL |
//! | `image_base_url` | `https://cdn2.thedogapi.com/images` | Prefix for `{image_id}.jpg` |
//! | `api_key` | none | Sent as `x-api-key` when set |
//! | `timeout_secs` | `30` | HTTP request timeout |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.thedogapi.com/v1/breeds";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://cdn2.thedogapi.com/images";
pub const CONFIG_FILENAME: &str = "everydog.toml";

/// Configuration for everydog, stored in `everydog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// URL of the breed list endpoint.
    #[config(env = "EVERYDOG_ENDPOINT", default = "https://api.thedogapi.com/v1/breeds")]
    pub endpoint: String,

    /// Base URL for breed images.
    #[config(
        env = "EVERYDOG_IMAGE_BASE_URL",
        default = "https://cdn2.thedogapi.com/images"
    )]
    pub image_base_url: String,

    /// Optional Dog API key. The breed list works without one.
    #[config(env = "EVERYDOG_API_KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[config(env = "EVERYDOG_TIMEOUT_SECS", default = 30)]
    pub timeout_secs: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl ViewerConfig {
    /// Load from environment, an optional explicit file, and the global file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = global_config_path() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Load from a single file, ignoring environment and global config.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::builder().file(path).load()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Location of the global `everydog.toml`, when the OS exposes a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "everydog", "everydog")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
