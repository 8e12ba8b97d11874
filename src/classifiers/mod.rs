pub mod decision_tree;

pub use decision_tree::{Answer, Inducer, InductionConfig, InductionError, Outcome};
