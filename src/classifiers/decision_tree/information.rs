//! Information-theoretic measures used to rank candidate split columns.
//!
//! All quantities are in bits. Every function is undefined on an empty table
//! and reports [`InductionError::EmptyTable`] instead of dividing by zero.

use crate::classifiers::decision_tree::error::InductionError;
use crate::classifiers::decision_tree::partition::partition;
use crate::core::{Table, ValueCounts};

/// Entropy of a value distribution: −Σ p·log2(p).
pub fn entropy_of_counts(counts: &ValueCounts) -> Result<f64, InductionError> {
    if counts.is_empty() {
        return Err(InductionError::EmptyTable);
    }
    let total = counts.total() as f64;
    let sum: f64 = counts
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum();
    // -0.0 for a single value
    Ok(-sum + 0.0)
}

/// Entropy of `column` over `table`.
pub fn entropy(table: &Table, column: usize) -> Result<f64, InductionError> {
    entropy_of_counts(&table.column_counts(column)?)
}

/// Entropy of the decision column.
pub fn decision_entropy(table: &Table) -> Result<f64, InductionError> {
    entropy_of_counts(&table.decision_counts())
}

/// Expected decision entropy after splitting on `column`.
pub fn conditional_information(table: &Table, column: usize) -> Result<f64, InductionError> {
    let counts = table.column_counts(column)?;
    if counts.is_empty() {
        return Err(InductionError::EmptyTable);
    }
    let total = counts.total() as f64;

    let mut info = 0.0;
    for (value, count) in counts.iter() {
        let subset = partition(table, column, value)?;
        info += (count as f64 / total) * decision_entropy(&subset)?;
    }
    Ok(info)
}

/// Entropy of the split column's own distribution.
pub fn split_information(table: &Table, column: usize) -> Result<f64, InductionError> {
    entropy(table, column)
}

/// Information gain normalised by split information.
///
/// `Ok(None)` when the column is constant (zero split information), meaning it
/// cannot split this table.
pub fn gain_ratio(table: &Table, column: usize) -> Result<Option<f64>, InductionError> {
    let split_info = split_information(table, column)?;
    if split_info == 0.0 {
        return Ok(None);
    }
    let gain = decision_entropy(table)? - conditional_information(table, column)?;
    Ok(Some(gain / split_info))
}
