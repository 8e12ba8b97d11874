use crate::classifiers::decision_tree::error::InductionError;
use crate::classifiers::decision_tree::information::gain_ratio;
use crate::core::{Table, ValueCounts};
use tracing::trace;

/// Relative margin a ratio must exceed the current best by to replace it.
/// Columns with the same value/class structure can differ in the last bits
/// depending on summation order.
const TIE_TOLERANCE: f64 = 1e-12;

fn beats(ratio: f64, best: f64) -> bool {
    ratio > best + TIE_TOLERANCE * best.abs().max(1.0)
}

/// The column picked to split a table, with the statistics that justified it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeChoice {
    pub column: usize,
    pub gain_ratio: f64,
    pub values: ValueCounts,
}

/// Picks the attribute column with the highest gain ratio.
///
/// Columns with zero split information are skipped. Ties, up to rounding,
/// keep the lowest column index. Returns `None` when no column can split the table.
pub fn choose_attribute(table: &Table) -> Result<Option<AttributeChoice>, InductionError> {
    let mut best: Option<(usize, f64)> = None;

    for column in table.attribute_columns() {
        let Some(ratio) = gain_ratio(table, column)? else {
            trace!(column, "skipping constant column");
            continue;
        };
        trace!(column, ratio, "candidate");
        if best.is_none_or(|(_, best_ratio)| beats(ratio, best_ratio)) {
            best = Some((column, ratio));
        }
    }

    match best {
        Some((column, gain_ratio)) => Ok(Some(AttributeChoice {
            column,
            gain_ratio,
            values: table.column_counts(column)?,
        })),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{table, tennis_table, weather_table};

    #[test]
    fn tie_keeps_lowest_column() {
        let choice = choose_attribute(&weather_table()).unwrap().unwrap();
        assert_eq!(choice.column, 0);
        let values: Vec<_> = choice.values.values().collect();
        assert_eq!(values, vec!["sunny", "rainy"]);
    }

    #[test]
    fn permuted_columns_tie_on_lowest_index() {
        // columns 0 and 1 only differ by a relabelling of values, so their
        // ratios are equal but summed in different orders
        let t = table(&[
            &["a3", "a2", "a1", "a0", "c2"],
            &["a0", "a1", "a1", "a0", "c1"],
            &["a3", "a1", "a1", "a3", "c2"],
            &["a3", "a3", "a1", "a0", "c1"],
            &["a2", "a0", "a1", "a1", "c1"],
            &["a0", "a0", "a1", "a1", "c1"],
            &["a1", "a1", "a1", "a1", "c2"],
        ]);
        let g0 = gain_ratio(&t, 0).unwrap().unwrap();
        let g1 = gain_ratio(&t, 1).unwrap().unwrap();
        assert!((g0 - g1).abs() < 1e-12, "g0={g0} g1={g1}");

        let choice = choose_attribute(&t).unwrap().unwrap();
        assert_eq!(choice.column, 0);
    }

    #[test]
    fn clear_improvement_still_wins() {
        assert!(beats(0.5 + 1e-9, 0.5));
        assert!(!beats(0.5 + 1e-16, 0.5));
        assert!(!beats(0.4, 0.5));
    }

    #[test]
    fn picks_highest_ratio() {
        let t = table(&[
            &["x", "a", "yes"],
            &["y", "a", "yes"],
            &["x", "b", "no"],
            &["y", "b", "no"],
        ]);
        let choice = choose_attribute(&t).unwrap().unwrap();
        assert_eq!(choice.column, 1);
        assert!((choice.gain_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tennis_prefers_outlook() {
        let choice = choose_attribute(&tennis_table()).unwrap().unwrap();
        assert_eq!(choice.column, 0);
    }

    #[test]
    fn only_constant_columns_yield_none() {
        let t = table(&[&["x", "k", "yes"], &["x", "k", "no"]]);
        assert_eq!(choose_attribute(&t).unwrap(), None);
    }

    #[test]
    fn decision_only_table_yields_none() {
        let t = table(&[&["yes"], &["no"]]);
        assert_eq!(choose_attribute(&t).unwrap(), None);
    }
}
