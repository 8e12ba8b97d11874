//! Command line front end.

mod commands;

pub use commands::{cmd_induce, cmd_schema, cmd_show};

use crate::classifiers::decision_tree::{BuildStrategy, ImpureLeafPolicy, InductionConfig};
use crate::io::{DEFAULT_ANSWER_PATH, load_config};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "decision-table",
    version,
    about = "Induce a gain-ratio decision tree from a delimited table"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a tree from a data file, save it as JSON and print it
    Induce(InduceArgs),

    /// Print a previously saved tree
    Show {
        /// JSON file written by `induce`
        answer: PathBuf,
    },

    /// Print the JSON schema of the configuration file
    Schema,
}

#[derive(Debug, Args)]
pub struct InduceArgs {
    /// Delimited data file; the last column is the decision class
    pub data: PathBuf,

    /// Field delimiter (a single character, or `tab`)
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Where to write the JSON tree
    #[arg(short, long, default_value = DEFAULT_ANSWER_PATH)]
    pub output: PathBuf,

    #[arg(long, value_enum)]
    pub strategy: Option<BuildStrategy>,

    /// Resolution for impure tables that no attribute can split
    #[arg(long, value_enum)]
    pub impure_leaf: Option<ImpureLeafPolicy>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not print the tree
    #[arg(long)]
    pub no_print: bool,
}

impl InduceArgs {
    pub fn resolve_config(&self) -> Result<InductionConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => InductionConfig::default(),
        };
        if let Some(d) = self.delimiter {
            config.delimiter = d;
        }
        if let Some(s) = self.strategy {
            config.strategy = s;
        }
        if let Some(p) = self.impure_leaf {
            config.impure_leaf = p;
        }
        Ok(config)
    }
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    if matches!(s, "tab" | "\\t") {
        return Ok('\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("delimiter must be a single character, got {s:?}")),
    }
}
