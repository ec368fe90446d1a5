//! Logger initialization parameters

use super::level::Level;
use std::path::PathBuf;

/// Parameters consumed by [`init`](crate::init): the log file to append to
/// and the initial minimum level. Not retained after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_path: PathBuf,
    pub level: Level,
}

impl Config {
    pub fn new(file_path: impl Into<PathBuf>, level: Level) -> Self {
        Self {
            file_path: file_path.into(),
            level,
        }
    }
}
