use crate::core::Table;
use crate::io::error::LoadError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_DELIMITER: char = ',';

/// Splits one line into fields. Surrounding whitespace is trimmed from the
/// line, fields themselves are kept verbatim.
#[inline]
pub fn split_row(line: &str, delimiter: char) -> Vec<String> {
    line.trim().split(delimiter).map(str::to_string).collect()
}

/// Reads a delimited table. Every non-blank line is a row (there is no
/// header); its last field is the decision class. Malformed rows are reported
/// with their 1-based line number.
pub fn read_table<R: BufRead>(reader: R, delimiter: char) -> Result<Table, LoadError> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let number = i + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: number,
            source,
        })?;
        if line.trim().is_empty() {
            debug!(line = number, "skipping blank line");
            continue;
        }
        rows.push((number, split_row(&line, delimiter)));
    }
    Ok(Table::from_numbered_rows(rows)?)
}

pub fn load_table<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Table, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(BufReader::new(file), delimiter)?;
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.width(),
        "loaded table"
    );
    Ok(table)
}
