//! Loading `SimConfig` from a JSON file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use outpost_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a JSON config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

pub fn parse_config(json: &str) -> Result<SimConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
