use crate::core::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|r| r.iter().map(|v| v.to_string()).collect())
        .collect()
}

pub fn table(raw: &[&[&str]]) -> Table {
    Table::from_rows(rows(raw)).unwrap()
}

/// Two attributes (weather, temperature) and a yes/no decision.
pub fn weather_table() -> Table {
    table(&[
        &["sunny", "hot", "yes"],
        &["sunny", "cool", "no"],
        &["rainy", "hot", "no"],
        &["rainy", "cool", "no"],
    ])
}

/// A classic play-tennis style table with four attributes.
pub fn tennis_table() -> Table {
    table(&[
        &["sunny", "hot", "high", "weak", "no"],
        &["sunny", "hot", "high", "strong", "no"],
        &["overcast", "hot", "high", "weak", "yes"],
        &["rain", "mild", "high", "weak", "yes"],
        &["rain", "cool", "normal", "weak", "yes"],
        &["rain", "cool", "normal", "strong", "no"],
        &["overcast", "cool", "normal", "strong", "yes"],
        &["sunny", "mild", "high", "weak", "no"],
        &["sunny", "cool", "normal", "weak", "yes"],
        &["rain", "mild", "normal", "weak", "yes"],
        &["sunny", "mild", "normal", "strong", "yes"],
        &["overcast", "mild", "high", "strong", "yes"],
        &["overcast", "hot", "normal", "weak", "yes"],
        &["rain", "mild", "high", "strong", "no"],
    ])
}

/// Seeded random table of nominal values `a0..`, classes `c0..`.
pub fn random_table(
    seed: u64,
    n_rows: usize,
    n_attributes: usize,
    cardinality: usize,
    n_classes: usize,
) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let raw = (0..n_rows)
        .map(|_| {
            let mut row: Vec<String> = (0..n_attributes)
                .map(|_| format!("a{}", rng.random_range(0..cardinality)))
                .collect();
            row.push(format!("c{}", rng.random_range(0..n_classes)));
            row
        })
        .collect();
    Table::from_rows(raw).unwrap()
}
