use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

const DEFAULT_DELIMITER: char = ',';
fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

/// How the node builder walks the tree.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BuildStrategy {
    /// Breadth-first expansion over an explicit node list, then a reverse merge.
    /// Stack usage does not grow with tree depth.
    #[default]
    Worklist,
    /// Each node builds and merges its children before returning.
    Recursive,
}

/// What to do with an impure table that no attribute can split.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ImpureLeafPolicy {
    /// Make a leaf deciding the most frequent class (first seen on ties).
    #[default]
    Majority,
    /// Abort induction with an error.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InductionConfig {
    #[serde(default = "default_delimiter")]
    #[schemars(
        title = "Delimiter",
        description = "Single character separating fields of the input file"
    )]
    pub delimiter: char,

    #[serde(default)]
    #[schemars(title = "Strategy", description = "Tree building strategy")]
    pub strategy: BuildStrategy,

    #[serde(default)]
    #[schemars(
        title = "Impure Leaf",
        description = "Resolution for impure tables without a usable split"
    )]
    pub impure_leaf: ImpureLeafPolicy,
}

impl Default for InductionConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            strategy: BuildStrategy::default(),
            impure_leaf: ImpureLeafPolicy::default(),
        }
    }
}

impl InductionConfig {
    pub fn schema() -> Schema {
        schema_for!(InductionConfig)
    }
}
