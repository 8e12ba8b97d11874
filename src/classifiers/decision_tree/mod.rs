mod answer;
mod attribute_selector;
mod config;
mod error;
mod inducer;
pub mod information;
pub mod nodes;
mod partition;

pub use answer::{Answer, Outcome};
pub use attribute_selector::{AttributeChoice, choose_attribute};
pub use config::{BuildStrategy, ImpureLeafPolicy, InductionConfig};
pub use error::InductionError;
pub use inducer::{Inducer, assemble, merge};
pub use partition::{partition, partition_all};
