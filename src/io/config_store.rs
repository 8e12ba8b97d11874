use crate::classifiers::decision_tree::InductionConfig;
use crate::io::error::StoreError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads an [`InductionConfig`] from a JSON file. Missing fields take their
/// defaults; unknown fields are rejected.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<InductionConfig, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: InductionConfig =
        serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
