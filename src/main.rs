use clap::Parser;
use decision_table::cli::{Cli, Commands, cmd_induce, cmd_schema, cmd_show};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decision_table=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Induce(args) => cmd_induce(&args)?,
        Commands::Show { answer } => cmd_show(&answer)?,
        Commands::Schema => cmd_schema()?,
    }

    Ok(())
}
