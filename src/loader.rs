use anyhow::{Context, Result, bail};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::models::EvalResults;

/// Read and parse a promptfoo results file. One local read, no retries;
/// both failure modes name the offending path in the error chain.
pub fn load(path: &Path) -> Result<EvalResults> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("file '{}' not found", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read '{}'", path.display()));
        }
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in '{}'", path.display()))
}
