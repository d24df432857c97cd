//! App-level context: launch settings resolved in `main`.
//!
//! Theme, storage and toasts are provided by `megilance_ui::ClientProvider`;
//! this module only carries what the shell itself needs.
//!
//! ```ignore
//! let config = use_client_config();
//! let name = config.user_name.clone();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use megilance_core::storage::{MemoryStorage, SharedStorage};
use megilance_core::ClientConfig;

/// Data directory, merged config and opened storage.
#[derive(Clone)]
pub struct LaunchContext {
    pub data_dir: PathBuf,
    pub config: ClientConfig,
    pub storage: SharedStorage,
}

impl LaunchContext {
    /// Defaults backed by memory, used when `main` has not set one.
    pub fn ephemeral() -> Self {
        Self {
            data_dir: std::env::temp_dir().join("megilance"),
            config: ClientConfig::default(),
            storage: Arc::new(MemoryStorage::new()),
        }
    }
}

/// Hook to access the merged client configuration.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Where exports are written (`<data_dir>/exports`).
pub fn use_export_dir() -> PathBuf {
    use_context::<ExportDir>().0
}

#[derive(Clone)]
pub struct ExportDir(pub PathBuf);
