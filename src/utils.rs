//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// App data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
