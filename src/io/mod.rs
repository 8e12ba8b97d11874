mod answer_store;
mod config_store;
mod error;
mod loader;

pub use answer_store::{DEFAULT_ANSWER_PATH, load_answer, save_answer};
pub use config_store::load_config;
pub use error::{LoadError, StoreError};
pub use loader::{DEFAULT_DELIMITER, load_table, read_table, split_row};
