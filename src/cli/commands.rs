use crate::classifiers::decision_tree::{Inducer, InductionConfig};
use crate::cli::InduceArgs;
use crate::io::{load_answer, load_table, save_answer};
use crate::render::TreeView;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn cmd_induce(args: &InduceArgs) -> Result<()> {
    let config = args.resolve_config()?;
    info!(
        delimiter = ?config.delimiter,
        strategy = %config.strategy,
        impure_leaf = %config.impure_leaf,
        "configuration"
    );

    let table = load_table(&args.data, config.delimiter)
        .with_context(|| format!("loading data from {}", args.data.display()))?;

    let answer = Inducer::from_config(&config)
        .induce(&table)
        .with_context(|| format!("inducing a tree from {}", args.data.display()))?;

    save_answer(&args.output, &answer)
        .with_context(|| format!("saving tree to {}", args.output.display()))?;

    if !args.no_print {
        print!("{}", TreeView::from_answer(&answer));
    }
    Ok(())
}

pub fn cmd_show(path: &Path) -> Result<()> {
    let answer =
        load_answer(path).with_context(|| format!("loading tree from {}", path.display()))?;
    print!("{}", TreeView::from_answer(&answer));
    Ok(())
}

pub fn cmd_schema() -> Result<()> {
    let schema = serde_json::to_string_pretty(&InductionConfig::schema())
        .context("serializing configuration schema")?;
    println!("{schema}");
    Ok(())
}
