//! # Data Directory and Startup
//!
//! Everything quire stores lives in one data directory: the two collection
//! files and an optional `quire.toml`.
//!
//! ## Data Directory Resolution
//!
//! [`resolve_data_dir`] picks the first of:
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `QUIRE_DATA` environment variable. Tests use this to isolate state.
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! The directory is not created here; the file store creates it on first write.
//!
//! ## Configuration
//!
//! [`initialize`] loads [`QuireConfig`] with `clapfig` from `quire.toml` in the
//! data directory, merged over compiled defaults and `QUIRE__*` environment
//! variables. A config file that cannot be read or parsed is reported with a
//! warning and the defaults are used.

use crate::api::QuireApi;
use crate::config::{QuireConfig, CONFIG_FILE};
use crate::error::{QuireError, Result};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_ENV_VAR: &str = "QUIRE_DATA";

pub struct QuireContext {
    pub api: QuireApi<FileStore>,
    pub config: QuireConfig,
    pub data_dir: PathBuf,
}

/// Where quire keeps its data, before looking at the filesystem.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "quire", "quire")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuireError::Storage("Could not determine a data directory".to_string()))
}

/// Load `quire.toml` from `data_dir`, falling back to defaults.
pub fn load_config(data_dir: &Path) -> QuireConfig {
    let loaded = Clapfig::builder::<QuireConfig>()
        .app_name("quire")
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .strict(false)
        .load();
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, dir = %data_dir.display(), "could not load config, using defaults");
            QuireConfig::default()
        }
    }
}

/// Resolve the data directory, load configuration and open the file store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<QuireContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    tracing::debug!(dir = %data_dir.display(), ?config, "initialized");

    let store = FileStore::new(&data_dir);
    let api = QuireApi::new(store, config.clone());

    Ok(QuireContext {
        api,
        config,
        data_dir,
    })
}
