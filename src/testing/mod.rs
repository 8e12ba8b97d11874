pub mod fixtures;

pub use fixtures::{random_table, rows, table, tennis_table, weather_table};
