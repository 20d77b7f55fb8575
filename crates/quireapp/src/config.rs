//! # Configuration
//!
//! Quire configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `QUIRE__PER_PAGE`, `QUIRE__SHOULDER`, etc.
//! 2. **Data directory config**: `<data dir>/quire.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `per_page` | `10` | Documents per page when listing |
//! | `shoulder` | `2` | Page links shown on each side of the current page |
//! | `previous_label` | `Previous` | Label of the backwards page link |
//! | `next_label` | `Next` | Label of the forwards page link |

use crate::pagination::{
    Pagination, DEFAULT_NEXT_LABEL, DEFAULT_PREVIOUS_LABEL, DEFAULT_SHOULDER,
};
use confique::Config;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "quire.toml";
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Configuration for quire, stored in `quire.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuireConfig {
    /// Documents per page when listing
    #[config(default = 10)]
    pub per_page: u64,

    /// Page links on each side of the current page
    #[config(default = 2)]
    pub shoulder: u64,

    #[config(default = "Previous")]
    pub previous_label: String,

    #[config(default = "Next")]
    pub next_label: String,
}

impl Default for QuireConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            shoulder: DEFAULT_SHOULDER,
            previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
            next_label: DEFAULT_NEXT_LABEL.to_string(),
        }
    }
}

impl QuireConfig {
    /// Pagination for a listing, using the configured shoulder and labels.
    pub fn pagination(&self, page: u64, per_page: u64, total: u64) -> Pagination {
        Pagination::new(page, per_page, total)
            .with_shoulder(self.shoulder)
            .with_labels(&self.previous_label, &self.next_label)
    }

    /// Look up a setting by key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "per_page" => Some(self.per_page.to_string()),
            "shoulder" => Some(self.shoulder.to_string()),
            "previous_label" => Some(self.previous_label.clone()),
            "next_label" => Some(self.next_label.clone()),
            _ => None,
        }
    }

    /// All settings as `(key, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ["per_page", "shoulder", "previous_label", "next_label"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|v| (key, v)))
            .collect()
    }
}
