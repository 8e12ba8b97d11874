use crate::classifiers::decision_tree::Answer;
use crate::io::error::StoreError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_ANSWER_PATH: &str = "answer.json";

/// Writes the answer as pretty-printed JSON (two-space indent).
pub fn save_answer<P: AsRef<Path>>(path: P, answer: &Answer) -> Result<(), StoreError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut w, answer).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writeln!(w).map_err(io_err)?;
    w.flush().map_err(io_err)?;

    info!(path = %path.display(), "saved answer");
    Ok(())
}

pub fn load_answer<P: AsRef<Path>>(path: P) -> Result<Answer, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
