//! Job-file loader for the CLI. A job is a small JSON document holding the
//! ciphertext and keyword, so longer messages do not have to be passed on the
//! command line.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("job file unreadable: {0}")]
    Io(String),
    #[error("job parse failed: {0}")]
    Parse(String),
}

/// One decryption request loaded from disk.
#[derive(Debug, Deserialize)]
pub struct DecryptJob {
    pub ciphertext: String,
    pub keyword: String,
}

/// Loads a JSON job file. Field validation beyond JSON shape is unnecessary;
/// the cipher normalizes whatever the strings contain.
pub fn load_job(path: impl AsRef<Path>) -> Result<DecryptJob, ConfigError> {
    let raw_json = fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    serde_json::from_str(&raw_json).map_err(|e| ConfigError::Parse(format!("{e}")))
}
