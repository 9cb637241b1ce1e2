//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over a JSON document on disk:
//!
//! ```json
//! { "coins": { "nickels": 10, "dimes": 5, "quarters": 4 },
//!   "products": { "cola": 3, "candy": 3, "chips": 3 } }
//! ```
//!
//! Missing sections and fields take their factory defaults.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::MachineConfig;

/// Reads [`MachineConfig`] from a JSON file.
pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<MachineConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError(e.to_string()),
        })?;
        let config: MachineConfig =
            serde_json::from_str(&text).map_err(|e| ConfigError::Corrupted(e.to_string()))?;
        info!("Config loaded from {}", self.path.display());
        Ok(config)
    }
}
