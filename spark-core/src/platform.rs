//! Platform-specific directories.

use std::path::PathBuf;
use crate::constants::APP_NAME;
use crate::error::{SparkError, SparkResult};

/// Configuration directory, e.g. `~/.config/spark` on Linux.
pub fn config_dir() -> SparkResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| SparkError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Data directory used for log files, e.g. `~/.local/share/spark` on Linux.
pub fn data_dir() -> SparkResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| SparkError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}
