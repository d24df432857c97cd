//! Console plus optional JSONL session logging.
//!
//! ```text
//! <logs_dir>/
//! └── raw/
//!     └── 2025-08-01_default.jsonl   # one file per session per day
//! ```
//!
//! Query with jq:
//!
//! ```bash
//! jq 'select(.level == "warn")' logs/raw/*.jsonl
//! ```

mod entry;
mod layer;
mod writer;

use std::path::{Path, PathBuf};

pub use entry::SessionLogEntry;
pub use layer::JsonlLayer;
pub use writer::{read_entries, SessionLogWriter};

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, UiError};

/// Where log files go for a given data directory.
pub fn logs_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `filter` when set. With `jsonl_dir` the session is
/// also mirrored to a JSONL file whose path is returned.
pub fn init_logging(
    filter: &str,
    jsonl_dir: Option<&Path>,
    session: &str,
) -> Result<Option<PathBuf>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| UiError::Config(format!("invalid log filter {filter:?}: {e}")))?;

    let jsonl = jsonl_dir
        .map(|dir| JsonlLayer::new(dir, session))
        .transpose()?;
    let path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(jsonl)
        .try_init()
        .map_err(|e| UiError::Config(format!("logging already initialised: {e}")))?;

    Ok(path)
}
