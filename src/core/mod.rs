mod error;
mod table;
mod value_counts;

pub use error::TableError;
pub use table::{Row, Table};
pub use value_counts::ValueCounts;
