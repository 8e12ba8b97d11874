use crate::core::{Table, TableError, ValueCounts};

/// Rows of `table` whose `column` equals `value`, in their original order.
pub fn partition(table: &Table, column: usize, value: &str) -> Result<Table, TableError> {
    table.check_column(column)?;
    let rows = table
        .rows()
        .iter()
        .filter(|row| row[column] == value)
        .cloned()
        .collect();
    Ok(Table::from_shared(rows, table.width()))
}

/// One child table per distinct value of `column`, in first-appearance order.
///
/// `values` must be the counts of `column` over `table`, so the children cover
/// every row exactly once.
pub fn partition_all(
    table: &Table,
    column: usize,
    values: &ValueCounts,
) -> Result<Vec<(String, Table)>, TableError> {
    values
        .values()
        .map(|value| Ok((value.to_string(), partition(table, column, value)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{random_table, tennis_table, weather_table};
    use std::sync::Arc;

    #[test]
    fn keeps_matching_rows_in_order() {
        let t = tennis_table();
        let sunny = partition(&t, 0, "sunny").unwrap();
        assert_eq!(sunny.len(), 5);
        assert!(sunny.rows().iter().all(|r| r[0] == "sunny"));
        let temps: Vec<_> = sunny.rows().iter().map(|r| r[1].as_str()).collect();
        assert_eq!(temps, vec!["hot", "hot", "mild", "cool", "mild"]);
    }

    #[test]
    fn unknown_value_gives_empty_table_of_same_width() {
        let t = weather_table();
        let none = partition(&t, 0, "snowy").unwrap();
        assert!(none.is_empty());
        assert_eq!(none.width(), 3);
    }

    #[test]
    fn rows_are_shared_not_copied() {
        let t = weather_table();
        let rainy = partition(&t, 0, "rainy").unwrap();
        assert!(Arc::ptr_eq(&rainy.rows()[0], &t.rows()[2]));
    }

    #[test]
    fn partitions_form_a_disjoint_cover() {
        for seed in 0..20 {
            let t = random_table(seed, 40, 4, 3, 3);
            for column in t.attribute_columns() {
                let counts = t.column_counts(column).unwrap();
                let parts = partition_all(&t, column, &counts).unwrap();
                assert_eq!(parts.iter().map(|(_, p)| p.len()).sum::<usize>(), t.len());

                for row in t.rows() {
                    let hits = parts
                        .iter()
                        .filter(|(_, p)| p.rows().iter().any(|r| Arc::ptr_eq(r, row)))
                        .count();
                    assert_eq!(hits, 1);
                }
            }
        }
    }

    #[test]
    fn out_of_range_column_is_an_error() {
        let t = weather_table();
        assert!(partition(&t, 9, "x").is_err());
    }
}
